//! Generator module - writes the static HTML tree
//!
//! Each route is built the same way: resolve the page's data record, render
//! it, write `<route>/index.html`. Pages are independent of each other.

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::content::Post;
use crate::query;
use crate::templates::{TemplateRenderer, STYLESHEET};
use crate::Blog;

/// Static site generator
pub struct Generator {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl Generator {
    /// Create a new generator
    pub fn new(blog: &Blog) -> Result<Self> {
        let renderer = TemplateRenderer::new()?;
        Ok(Self {
            blog: blog.clone(),
            renderer,
        })
    }

    /// Generate the entire site
    pub fn generate(&self, posts: &[Post]) -> Result<()> {
        fs::create_dir_all(&self.blog.public_dir)?;

        self.write_stylesheet()?;
        self.copy_source_assets()?;

        let site = query::site_metadata(&self.blog.config);

        // Landing page
        let html = self.renderer.render_home(&site, &self.blog.config.github)?;
        self.write_page("", &html)?;

        // Post list
        let list = query::list_posts(posts, &self.blog.config.date_format);
        let html = self.renderer.render_list(&site, &list)?;
        self.write_page("blog", &html)?;

        // One page per post, resolved through the same slug query the
        // server-side router would use
        for post in posts {
            let Some(detail) = query::post_by_slug(posts, &post.slug) else {
                tracing::warn!("No post resolved for slug {}", post.slug);
                continue;
            };
            let html = self.renderer.render_post(&site, &detail)?;
            self.write_page(post.slug.trim_start_matches('/'), &html)?;
        }

        // About page
        let html = self.renderer.render_about(&site)?;
        self.write_page("about", &html)?;

        tracing::info!("Generated {} post pages", posts.len());

        Ok(())
    }

    /// Write one rendered page as `<route>/index.html` under the public dir
    fn write_page(&self, route: &str, html: &str) -> Result<()> {
        let dir = self.blog.public_dir.join(route);
        fs::create_dir_all(&dir)?;
        let output_path = dir.join("index.html");
        fs::write(&output_path, html)
            .map_err(|e| anyhow::anyhow!("Failed to write {:?}: {}", output_path, e))?;
        tracing::debug!("Generated: {:?}", output_path);
        Ok(())
    }

    /// Write the embedded stylesheet
    fn write_stylesheet(&self) -> Result<()> {
        let css_dir = self.blog.public_dir.join("css");
        fs::create_dir_all(&css_dir)?;
        fs::write(css_dir.join("style.css"), STYLESHEET)?;
        Ok(())
    }

    /// Copy source assets (images, favicon, etc.) to the public directory
    fn copy_source_assets(&self) -> Result<()> {
        let source_dir = &self.blog.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            // Markdown files become pages, not assets
            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(ext, Some("md") | Some("markdown")) {
                continue;
            }

            let relative = path.strip_prefix(source_dir)?;
            let dest = self.blog.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}
