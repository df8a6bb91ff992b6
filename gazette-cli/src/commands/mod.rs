//! CLI command implementations.

pub mod articles;
pub mod config;
pub mod pages;
pub mod related;
pub mod search;
pub mod show;
pub mod tags;

pub use articles::{list_articles, list_featured};
pub use config::config_value;
pub use pages::list_pages;
pub use related::related_articles;
pub use search::search_site;
pub use show::show_page;
pub use tags::list_tags;

use anyhow::{Context, Result};
use gazette_core::{Blog, Config};
use std::path::Path;

/// Load the configuration and every page under its content directory
pub fn load_blog(config_path: &Path) -> Result<Blog> {
    let config = Config::from_file(config_path).with_context(|| {
        format!(
            "Failed to load configuration from {}",
            config_path.display()
        )
    })?;
    let blog = Blog::load(&config).context("Failed to load pages")?;
    tracing::debug!(pages = blog.pages().len(), "Loaded blog");
    Ok(blog)
}
