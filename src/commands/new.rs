//! Create a new post

use anyhow::Result;
use std::fs;

use crate::Blog;

/// Create a new post file with a front-matter scaffold
pub fn run(blog: &Blog, title: &str, draft: bool) -> Result<()> {
    let now = chrono::Local::now();

    fs::create_dir_all(&blog.source_dir)?;

    let slug = slug::slugify(title);
    let filename = blog
        .config
        .new_post_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = blog.source_dir.join(&filename);
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let mut content = format!(
        "---\ntitle: {}\ncreatedDate: {}\n",
        title,
        now.format("%Y-%m-%d")
    );
    if draft {
        content.push_str("published: false\n");
    }
    content.push_str("---\n\n");

    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);

    Ok(())
}
