//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub author: String,
    pub description: String,
    pub keywords: Option<Vec<String>>,

    // URL
    pub url: String,
    pub root: String,
    /// Profile URL linked from the landing page
    pub github: String,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Writing
    pub new_post_name: String,
    pub render_drafts: bool,
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Date format for post listings (Moment.js style)
    pub date_format: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Ming Zhong".to_string(),
            author: "mmzhong".to_string(),
            description: "mmzhong's blog".to_string(),
            keywords: Some(vec!["mmzhong".to_string(), "blog".to_string()]),

            url: "https://mmzhong.github.io".to_string(),
            root: "/".to_string(),
            github: "https://github.com/mmzhong".to_string(),

            source_dir: "blog".to_string(),
            public_dir: "public".to_string(),

            new_post_name: ":title.md".to_string(),
            render_drafts: false,
            highlight: HighlightConfig::default(),

            date_format: "MMM DD, YYYY".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Keywords joined for the meta tag
    pub fn keywords_joined(&self) -> String {
        self.keywords
            .as_ref()
            .map(|k| k.join(", "))
            .unwrap_or_default()
    }
}

/// Code highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Ming Zhong");
        assert_eq!(config.source_dir, "blog");
        assert_eq!(config.date_format, "MMM DD, YYYY");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Blog
author: Test User
github: https://github.com/test
date_format: YYYY-MM-DD
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Blog");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.github, "https://github.com/test");
        assert_eq!(config.date_format, "YYYY-MM-DD");
        // Unspecified fields keep their defaults
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_keywords_joined() {
        let config = SiteConfig::default();
        assert_eq!(config.keywords_joined(), "mmzhong, blog");

        let without = SiteConfig {
            keywords: None,
            ..Default::default()
        };
        assert_eq!(without.keywords_joined(), "");
    }
}
