//! Fetch a single page in structured form.

use super::load_blog;
use crate::{agent, ShowFormat};
use anyhow::{Context, Result};
use std::path::Path;

/// Fetch a single page and render it in the requested format.
pub fn show_page(config_path: &Path, path: &str, format: ShowFormat) -> Result<()> {
    let blog = load_blog(config_path)?;
    let page = blog
        .find(path)
        .with_context(|| format!("Page '{}' not found", path))?;

    match format {
        ShowFormat::Json => {
            let payload = agent::envelope("page.full", agent::page_to_payload(page));
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        ShowFormat::Frontmatter => {
            let fm = serde_yaml::to_string(&page.frontmatter)?;
            println!("---\n{}---", fm);
        }
    }

    Ok(())
}
