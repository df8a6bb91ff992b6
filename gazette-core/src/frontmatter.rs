//! Frontmatter parsing from markdown files.

use crate::models::Frontmatter;
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontmatterError {
    #[error("Invalid YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

static FRONTMATTER_REGEX: OnceLock<Regex> = OnceLock::new();

fn frontmatter_regex() -> &'static Regex {
    FRONTMATTER_REGEX.get_or_init(|| {
        Regex::new(r"(?s)^---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n(.*))?$").unwrap()
    })
}

/// Parse frontmatter from markdown content
///
/// Returns a tuple of (frontmatter, markdown_body).
/// If no frontmatter is present, returns default frontmatter with the full content as body.
/// No field is required: a blog page may carry nothing but a date, or nothing at all.
///
/// # Example
///
/// ```
/// use gazette_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: My Post\ndate: 2025-01-01\n---\n# Hello World\n";
///
/// let (fm, body) = parse_frontmatter(content).unwrap();
/// assert_eq!(fm.title.as_deref(), Some("My Post"));
/// assert_eq!(fm.date.as_deref(), Some("2025-01-01"));
/// assert!(body.trim().starts_with("# Hello World"));
/// ```
pub fn parse_frontmatter(content: &str) -> Result<(Frontmatter, String), FrontmatterError> {
    let Some(captures) = frontmatter_regex().captures(content) else {
        return Ok((Frontmatter::default(), content.to_string()));
    };

    let yaml = captures.get(1).map_or("", |m| m.as_str());
    let body = captures.get(2).map_or("", |m| m.as_str());

    let frontmatter = if yaml.trim().is_empty() {
        Frontmatter::default()
    } else {
        serde_yaml::from_str(yaml)?
    };

    Ok((frontmatter, body.to_string()))
}
