//! Post model

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// One blog post, loaded from a Markdown source file.
///
/// `slug` and `html` are derived exactly once when the post is loaded and
/// never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Creation date (drives list ordering)
    pub created: DateTime<Local>,

    /// Short description
    pub desc: Option<String>,

    /// Post tags
    pub tags: Vec<String>,

    /// Raw markdown body
    pub raw: String,

    /// Rendered HTML body
    pub html: String,

    /// URL path segment with a leading slash, e.g. "/hello-world"
    pub slug: String,

    /// Full permalink URL
    pub permalink: String,

    /// Source file path (relative to the source dir)
    pub source: String,

    /// Full source file path
    pub full_source: PathBuf,

    /// Whether the post is published
    pub published: bool,

    /// Custom front-matter fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Post {
    /// Create a new post with minimal required fields
    pub fn new(title: String, created: DateTime<Local>, source: String) -> Self {
        let slug = format!("/{}", slug::slugify(&title));
        Self {
            title,
            created,
            desc: None,
            tags: Vec::new(),
            raw: String::new(),
            html: String::new(),
            slug,
            permalink: String::new(),
            source: source.clone(),
            full_source: PathBuf::from(source),
            published: true,
            extra: HashMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_new_post_slug() {
        let date = Local.with_ymd_and_hms(2020, 1, 2, 0, 0, 0).unwrap();
        let post = Post::new("Hello World".to_string(), date, "hello-world.md".to_string());
        assert_eq!(post.slug, "/hello-world");
        assert!(post.published);
    }
}
