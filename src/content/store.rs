//! Content store - loads posts from the source directory

use anyhow::Result;
use chrono::Local;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

use super::{FrontMatter, MarkdownRenderer, Post};
use crate::Blog;

/// Loads every Markdown post under the source directory and exposes them as
/// an ordered set, newest first. This is the only place ordering is
/// established; downstream consumers take the order as given.
pub struct ContentStore<'a> {
    blog: &'a Blog,
    renderer: MarkdownRenderer,
}

impl<'a> ContentStore<'a> {
    /// Create a new content store
    pub fn new(blog: &'a Blog) -> Self {
        let renderer = MarkdownRenderer::with_options(
            &blog.config.highlight.theme,
            blog.config.highlight.line_number,
        );
        Self { blog, renderer }
    }

    /// Load all posts, sorted by creation date descending
    pub fn load_posts(&self) -> Result<Vec<Post>> {
        let source_dir = &self.blog.source_dir;
        if !source_dir.exists() {
            return Ok(Vec::new());
        }

        let mut posts = Vec::new();
        let mut seen_slugs = HashSet::new();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !is_markdown_file(path) {
                continue;
            }

            match self.load_post(path) {
                Ok(post) => {
                    if !post.published && !self.blog.config.render_drafts {
                        continue;
                    }
                    if !seen_slugs.insert(post.slug.clone()) {
                        tracing::warn!("Duplicate slug {} from {:?}, skipping", post.slug, path);
                        continue;
                    }
                    posts.push(post);
                }
                Err(e) => {
                    tracing::warn!("Failed to load post {:?}: {}", path, e);
                }
            }
        }

        // Newest first
        posts.sort_by(|a, b| b.created.cmp(&a.created));

        Ok(posts)
    }

    /// Load a single post from a file
    fn load_post(&self, path: &Path) -> Result<Post> {
        let content = fs::read_to_string(path)?;
        let (fm, body) = FrontMatter::parse(&content)?;

        // File mtime stands in when the front-matter has no date
        let file_modified = fs::metadata(path)?
            .modified()
            .ok()
            .map(chrono::DateTime::<Local>::from);

        let created = fm
            .parse_created()
            .unwrap_or_else(|| file_modified.unwrap_or_else(Local::now));

        let title = fm.title.unwrap_or_else(|| {
            path.file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("Untitled")
                .to_string()
        });

        let source = path
            .strip_prefix(&self.blog.source_dir)
            .unwrap_or(path)
            .to_string_lossy()
            .to_string();

        let html = self.renderer.render(body)?;

        let mut post = Post::new(title, created, source);
        post.desc = fm.desc;
        post.tags = fm.tags;
        post.raw = body.to_string();
        post.html = html;
        // The slug comes from the file name, not the title
        post.slug = derive_slug(path);
        post.permalink = crate::helpers::full_url_for(&self.blog.config, &post.slug);
        post.full_source = path.to_path_buf();
        post.published = fm.published;
        post.extra = fm.extra;

        Ok(post)
    }
}

/// Derive the URL path segment from the source file name
fn derive_slug(path: &Path) -> String {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");
    format!("/{}", slug::slugify(stem))
}

/// Check if a file is a markdown file
fn is_markdown_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e == "md" || e == "markdown")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_post(dir: &Path, name: &str, title: &str, date: &str) {
        let content = format!("---\ntitle: {}\ncreatedDate: {}\n---\n\nBody of {}.\n", title, date, title);
        fs::write(dir.join(name), content).unwrap();
    }

    fn test_blog(base: &Path) -> Blog {
        fs::create_dir_all(base.join("blog")).unwrap();
        Blog::new(base).unwrap()
    }

    #[test]
    fn test_load_posts_sorted_desc() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog.source_dir, "older.md", "Older", "2019-05-01");
        write_post(&blog.source_dir, "newer.md", "Newer", "2021-03-15");
        write_post(&blog.source_dir, "middle.md", "Middle", "2020-01-02");

        let store = ContentStore::new(&blog);
        let posts = store.load_posts().unwrap();

        let titles: Vec<_> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Newer", "Middle", "Older"]);
    }

    #[test]
    fn test_slug_from_file_name() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog.source_dir, "My First Post.md", "Some Other Title", "2020-01-02");

        let store = ContentStore::new(&blog);
        let posts = store.load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].slug, "/my-first-post");
        assert_eq!(posts[0].permalink, "https://mmzhong.github.io/my-first-post");
        assert_eq!(posts[0].title, "Some Other Title");
    }

    #[test]
    fn test_drafts_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog.source_dir, "live.md", "Live", "2020-01-02");
        fs::write(
            blog.source_dir.join("draft.md"),
            "---\ntitle: Draft\ncreatedDate: 2020-01-03\npublished: false\n---\n\nnot yet\n",
        )
        .unwrap();

        let store = ContentStore::new(&blog);
        let posts = store.load_posts().unwrap();

        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "Live");
    }

    #[test]
    fn test_non_markdown_ignored() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        write_post(&blog.source_dir, "real.md", "Real", "2020-01-02");
        fs::write(blog.source_dir.join("photo.png"), [0u8; 4]).unwrap();

        let store = ContentStore::new(&blog);
        let posts = store.load_posts().unwrap();

        assert_eq!(posts.len(), 1);
    }

    #[test]
    fn test_rendered_body() {
        let tmp = tempfile::tempdir().unwrap();
        let blog = test_blog(tmp.path());
        fs::write(
            blog.source_dir.join("hi.md"),
            "---\ntitle: Hi\ncreatedDate: 2020-01-02\n---\n\n# Heading\n\nHello.\n",
        )
        .unwrap();

        let store = ContentStore::new(&blog);
        let posts = store.load_posts().unwrap();

        assert!(posts[0].html.contains("<h1>Heading</h1>"));
        assert!(posts[0].raw.contains("# Heading"));
    }
}
