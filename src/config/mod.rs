//! Site configuration

mod site;

pub use site::{HighlightConfig, SiteConfig};
