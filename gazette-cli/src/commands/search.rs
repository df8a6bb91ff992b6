//! Search command implementation

use super::load_blog;
use crate::agent;
use anyhow::Result;
use gazette_core::SearchResult;
use std::fmt::Write;
use std::path::Path;

/// Search page titles and headers; `limit` overrides the configured cap
pub fn search_site(config_path: &Path, query: &str, limit: Option<usize>, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    let limit = limit.unwrap_or(blog.search_config().max_suggestions);
    let results = blog.search_with_limit(query, limit);
    tracing::debug!(query, limit, hits = results.len(), "Search finished");

    if json {
        let payload = agent::envelope(
            "search.results",
            agent::SearchData {
                query: query.to_string(),
                limit,
                total: results.len(),
                results: results.iter().map(agent::search_hit).collect(),
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    if results.is_empty() {
        println!("No results found for '{}'", query);
        return Ok(());
    }

    print!("{}", render_results(query, &results));
    Ok(())
}

fn render_results(query: &str, results: &[SearchResult<'_>]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Found {} result(s) for '{}':", results.len(), query);
    for (i, result) in results.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, result.label());
        let _ = writeln!(out, "   {}", result.path);
    }
    out
}
