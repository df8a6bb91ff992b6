//! List every page with its classification.

use super::load_blog;
use crate::agent;
use anyhow::Result;
use gazette_core::Page;
use std::fmt::Write;
use std::path::Path;

pub fn list_pages(config_path: &Path, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    let pages: Vec<&Page> = blog.pages().iter().collect();

    if json {
        let payload = agent::envelope("page.list", agent::page_summaries(&pages));
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        print!("{}", render_pages(&pages));
    }
    Ok(())
}

fn render_pages(pages: &[&Page]) -> String {
    let mut out = String::new();
    for page in pages {
        let title = if page.title.is_empty() {
            "(untitled)"
        } else {
            page.title.as_str()
        };
        let _ = writeln!(
            out,
            "{:<8} {:<10} {}  {}",
            page.kind().as_str(),
            page.icon.as_str(),
            page.path,
            title
        );
    }
    out
}
