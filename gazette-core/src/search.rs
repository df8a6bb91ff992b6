//! Search-as-you-type over page titles and their section headers.

use crate::models::Page;
use gazette_types::Header;
use serde::Serialize;

/// Suggestion cap used when none is configured
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// A search hit: a whole page, or one of its headers
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult<'a> {
    /// Page path, with `#slug` appended for header hits
    pub path: String,

    pub page: &'a Page,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<&'a Header>,
}

impl<'a> SearchResult<'a> {
    fn for_page(page: &'a Page) -> Self {
        Self {
            path: page.path.to_string(),
            page,
            header: None,
        }
    }

    fn for_header(page: &'a Page, header: &'a Header) -> Self {
        Self {
            path: page.path.with_anchor(&header.slug),
            page,
            header: Some(header),
        }
    }

    /// "Page title > Header title" for header hits, the page title otherwise
    pub fn label(&self) -> String {
        match self.header {
            Some(header) => format!("{} > {}", self.page.title, header.title),
            None => self.page.title.clone(),
        }
    }
}

/// Search pages by searchable title, falling back to their headers
///
/// The query is trimmed and lowercased, then matched as a case-insensitive
/// substring. A page whose searchable title matches yields a single result;
/// otherwise each matching header yields one. Pages are scanned in order and
/// scanning stops once `max_suggestions` results are collected. A
/// `max_suggestions` of 0 means unlimited.
///
/// # Example
///
/// ```
/// use gazette_core::{classify::classified, search::search, Page};
/// use gazette_types::Header;
///
/// let pages = vec![
///     classified(Page::new("/a").with_title("Rust Basics")
///         .with_headers(vec![Header::new("Intro", "intro")])),
///     classified(Page::new("/b").with_title("Go Guide")),
/// ];
///
/// let hits = search(&pages, "intro", 5);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].path, "/a#intro");
/// ```
pub fn search<'a>(
    pages: impl IntoIterator<Item = &'a Page>,
    query: &str,
    max_suggestions: usize,
) -> Vec<SearchResult<'a>> {
    let query = query.trim().to_lowercase();
    let matches = |text: &str| text.to_lowercase().contains(&query);
    let limited = max_suggestions != 0;

    let mut results = Vec::new();
    for page in pages {
        if limited && results.len() >= max_suggestions {
            break;
        }
        search_page(page, &matches, &mut results);
    }

    if limited {
        results.truncate(max_suggestions);
    }

    tracing::debug!(query = %query, hits = results.len(), "search");
    results
}

fn search_page<'a>(
    page: &'a Page,
    matches: &impl Fn(&str) -> bool,
    results: &mut Vec<SearchResult<'a>>,
) {
    if matches(&page.searchable_title) {
        results.push(SearchResult::for_page(page));
        return;
    }

    results.extend(
        page.headers
            .iter()
            .filter(|header| matches(&header.title))
            .map(|header| SearchResult::for_header(page, header)),
    );
}
