//! Anchor and tag slugs.

use regex::Regex;
use std::sync::OnceLock;
use unicode_segmentation::UnicodeSegmentation;

static HYPHEN_RUNS: OnceLock<Regex> = OnceLock::new();

/// Convert heading or tag text to a URL-safe slug
///
/// Rules:
/// - Lowercase
/// - Whitespace, underscores, slashes and dots become hyphens
/// - Other punctuation and symbols are dropped
/// - Unicode letters and digits are kept
/// - Runs of hyphens collapse; leading/trailing hyphens are trimmed
///
/// # Examples
///
/// ```
/// use gazette_core::slugify;
///
/// assert_eq!(slugify("Getting Started"), "getting-started");
/// assert_eq!(slugify("Laravel & Vue"), "laravel-vue");
/// assert_eq!(slugify("v1.2 Release"), "v1-2-release");
/// ```
pub fn slugify(input: &str) -> String {
    let hyphenated = input
        .to_lowercase()
        .graphemes(true)
        .filter_map(|g| {
            let c = g.chars().next()?;
            if c.is_whitespace() || matches!(c, '_' | '-' | '/' | '.') {
                Some("-")
            } else if c.is_alphanumeric() {
                Some(g)
            } else {
                None
            }
        })
        .collect::<String>();

    let re = HYPHEN_RUNS.get_or_init(|| Regex::new(r"-+").unwrap());
    re.replace_all(&hyphenated, "-")
        .trim_matches('-')
        .to_string()
}
