//! Random related articles for a page.

use super::load_blog;
use crate::agent;
use anyhow::{bail, Result};
use std::path::Path;

pub fn related_articles(config_path: &Path, path: &str, count: usize, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    if blog.find(path).is_none() {
        bail!("Page '{}' not found", path);
    }

    let related = blog.related(path, count);

    if json {
        let payload = agent::envelope(
            "article.related",
            agent::RelatedData {
                path: path.to_string(),
                count,
                related: agent::page_summaries(&related),
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if related.is_empty() {
        println!("No other articles to suggest");
    } else {
        for page in related {
            println!("{}  {}", page.path, page.title);
        }
    }
    Ok(())
}
