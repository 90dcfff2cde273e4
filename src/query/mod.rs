//! Typed page queries
//!
//! Every page is built in two phases: a resolve step here that produces a
//! plain data record, and a render step in `templates` that consumes it.
//! Render code never reads the post store directly.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Post;
use crate::helpers::format_date;

/// Site-level metadata consumed by the page shell
#[derive(Debug, Clone, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: String,
}

/// Resolve site metadata from the loaded configuration
pub fn site_metadata(config: &SiteConfig) -> SiteMetadata {
    SiteMetadata {
        title: config.title.clone(),
        author: config.author.clone(),
        description: config.description.clone(),
        keywords: config.keywords_joined(),
    }
}

/// Data record for the post list page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostList {
    pub total_count: usize,
    pub posts: Vec<PostItem>,
}

/// One entry of the post list
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostItem {
    pub title: String,
    pub desc: Option<String>,
    pub tags: Vec<String>,
    /// Creation date, already formatted for display
    pub created: String,
    pub slug: String,
}

/// Resolve the list page record from the loaded posts.
///
/// Order is inherited from the input slice (the store sorts newest-first at
/// load time); this function never re-sorts.
pub fn list_posts(posts: &[Post], date_format: &str) -> PostList {
    let posts: Vec<PostItem> = posts
        .iter()
        .map(|p| PostItem {
            title: p.title.clone(),
            desc: p.desc.clone(),
            tags: p.tags.clone(),
            created: format_date(&p.created, date_format),
            slug: p.slug.clone(),
        })
        .collect();

    PostList {
        total_count: posts.len(),
        posts,
    }
}

/// Data record for a single post page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostDetail {
    pub title: String,
    /// Rendered markup, already sanitized by the Markdown pipeline.
    /// It is inserted into the page verbatim.
    pub html: String,
}

/// Resolve exactly one post by its slug.
///
/// A miss returns `None`; deciding what a missing page means (404) is the
/// caller's job.
pub fn post_by_slug(posts: &[Post], slug: &str) -> Option<PostDetail> {
    posts.iter().find(|p| p.slug == slug).map(|p| PostDetail {
        title: p.title.clone(),
        html: p.html.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    fn post(title: &str, slug: &str, y: i32, m: u32, d: u32) -> Post {
        let date = Local.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap();
        let mut p = Post::new(title.to_string(), date, format!("{}.md", title));
        p.slug = slug.to_string();
        p.html = format!("<p>{}</p>", title);
        p
    }

    #[test]
    fn test_list_posts_maps_fields() {
        let posts = vec![post("Post A", "/post-a", 2020, 1, 2)];
        let list = list_posts(&posts, "MMM DD, YYYY");

        assert_eq!(list.total_count, 1);
        assert_eq!(list.posts[0].title, "Post A");
        assert_eq!(list.posts[0].created, "Jan 02, 2020");
        assert_eq!(list.posts[0].slug, "/post-a");
    }

    #[test]
    fn test_list_posts_empty() {
        let list = list_posts(&[], "MMM DD, YYYY");
        assert_eq!(list.total_count, 0);
        assert!(list.posts.is_empty());
    }

    #[test]
    fn test_list_posts_preserves_input_order() {
        // Deliberately unsorted; the resolve step must not reorder
        let posts = vec![
            post("Oldest", "/oldest", 2018, 1, 1),
            post("Newest", "/newest", 2021, 1, 1),
            post("Middle", "/middle", 2019, 6, 1),
        ];
        let list = list_posts(&posts, "YYYY-MM-DD");

        let titles: Vec<_> = list.posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Oldest", "Newest", "Middle"]);
    }

    #[test]
    fn test_post_by_slug() {
        let posts = vec![
            post("Post A", "/post-a", 2020, 1, 2),
            post("Post B", "/post-b", 2020, 2, 3),
        ];

        let detail = post_by_slug(&posts, "/post-b").unwrap();
        assert_eq!(detail.title, "Post B");
        assert_eq!(detail.html, "<p>Post B</p>");

        assert!(post_by_slug(&posts, "/nope").is_none());
    }

    #[test]
    fn test_site_metadata() {
        let config = crate::config::SiteConfig::default();
        let meta = site_metadata(&config);
        assert_eq!(meta.title, "Ming Zhong");
        assert_eq!(meta.author, "mmzhong");
        assert_eq!(meta.keywords, "mmzhong, blog");
    }
}
