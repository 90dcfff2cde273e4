//! Page templates, embedded in the binary
//!
//! This is the render half of the page contract: every function takes a
//! resolved data record from `query` and returns a finished HTML document.
//! Rendering is pure; calling it twice with the same record yields identical
//! output.

use anyhow::Result;
use tera::{Context, Tera};

use crate::query::{PostDetail, PostList, SiteMetadata};

/// The global stylesheet, written to `css/style.css` at generation time
pub const STYLESHEET: &str = include_str!("theme/style.css");

/// Template renderer with the embedded page templates
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        // Post bodies arrive as pre-rendered trusted markup and must be
        // inserted verbatim, so autoescaping stays off.
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("theme/layout.html")),
            ("home.html", include_str!("theme/home.html")),
            ("blog.html", include_str!("theme/blog.html")),
            ("post.html", include_str!("theme/post.html")),
            ("about.html", include_str!("theme/about.html")),
        ])?;

        Ok(Self { tera })
    }

    /// Render the landing page: welcome card with links to the post list
    /// and the author's profile
    pub fn render_home(&self, site: &SiteMetadata, github: &str) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("github", github);
        Ok(self.tera.render("home.html", &context)?)
    }

    /// Render the post list page.
    ///
    /// Emits one list item per entry, in the order the record carries them.
    pub fn render_list(&self, site: &SiteMetadata, list: &PostList) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("list", list);
        Ok(self.tera.render("blog.html", &context)?)
    }

    /// Render a single post page.
    ///
    /// The record's `html` is inserted as-is; it must already be sanitized.
    pub fn render_post(&self, site: &SiteMetadata, post: &PostDetail) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        context.insert("post", post);
        Ok(self.tera.render("post.html", &context)?)
    }

    /// Render the about page
    pub fn render_about(&self, site: &SiteMetadata) -> Result<String> {
        let mut context = Context::new();
        context.insert("site", site);
        Ok(self.tera.render("about.html", &context)?)
    }
}
