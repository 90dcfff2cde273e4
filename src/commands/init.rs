//! Initialize a new blog

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default configuration written by `init`
const DEFAULT_CONFIG: &str = r#"# Site
title: Ming Zhong
author: mmzhong
description: mmzhong's blog
keywords:
  - mmzhong
  - blog

# URL
url: https://mmzhong.github.io
root: /
github: https://github.com/mmzhong

# Directory
source_dir: blog
public_dir: public

# Writing
new_post_name: :title.md
render_drafts: false
highlight:
  theme: base16-ocean.dark
  line_number: false

# Date format for post listings
date_format: MMM DD, YYYY
"#;

/// First post written by `init`
const HELLO_POST: &str = r#"---
title: Hello World
createdDate: 2020-01-02
desc: the very first post
tags:
  - meta
---

Welcome to the blog.
"#;

/// Initialize a new blog in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("blog"))?;
    fs::create_dir_all(target_dir.join("blog/images"))?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Already initialized: {:?}", config_path);
    }

    fs::write(config_path, DEFAULT_CONFIG)?;
    fs::write(target_dir.join("blog/hello-world.md"), HELLO_POST)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Blog;

    #[test]
    fn test_init_site() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();

        assert!(tmp.path().join("_config.yml").exists());
        assert!(tmp.path().join("blog/hello-world.md").exists());

        // The initialized site loads and generates
        let blog = Blog::new(tmp.path()).unwrap();
        assert_eq!(blog.config.title, "Ming Zhong");
        blog.generate().unwrap();
        assert!(blog.public_dir.join("hello-world/index.html").exists());
    }

    #[test]
    fn test_init_refuses_existing() {
        let tmp = tempfile::tempdir().unwrap();
        init_site(tmp.path()).unwrap();
        assert!(init_site(tmp.path()).is_err());
    }
}
