//! Tag counts across articles.

use super::load_blog;
use crate::agent;
use anyhow::Result;
use gazette_core::TagCount;
use std::fmt::Write;
use std::path::Path;

pub fn list_tags(config_path: &Path, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    let tags = blog.tags();

    if json {
        let payload = agent::envelope("tag.list", &tags);
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if tags.is_empty() {
        println!("No tags found");
    } else {
        print!("{}", render_tags(&tags));
    }
    Ok(())
}

fn render_tags(tags: &[TagCount]) -> String {
    let width = tags.iter().map(|tag| tag.name.len()).max().unwrap_or(0);
    let mut out = String::new();
    for tag in tags {
        let _ = writeln!(
            out,
            "{:<width$}  {:>3}  {}",
            tag.name,
            tag.count,
            tag.path,
            width = width
        );
    }
    out
}
