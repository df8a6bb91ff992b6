//! Shared JSON schema helpers for machine-consumable command output.

use gazette_core::{dates, Frontmatter, Page, SearchResult};
use gazette_types::Header;
use serde::Serialize;

pub const SCHEMA_VERSION: &str = "2026-10-gazette-v1";

/// Standard envelope for machine-consumable responses.
#[derive(Serialize)]
pub struct Envelope<T> {
    pub schema_version: &'static str,
    pub kind: &'static str,
    pub data: T,
}

pub fn envelope<T>(kind: &'static str, data: T) -> Envelope<T> {
    Envelope {
        schema_version: SCHEMA_VERSION,
        kind,
        data,
    }
}

/// Listing entry for a page.
#[derive(Serialize)]
pub struct PageSummary {
    pub path: String,
    pub title: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub date: Option<String>,
    pub display_date: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct PageData {
    #[serde(flatten)]
    pub summary: PageSummary,
    pub searchable_title: String,
    pub headers: Vec<Header>,
    pub frontmatter: Frontmatter,
    pub source_path: Option<String>,
}

#[derive(Serialize)]
pub struct FeaturedData {
    pub featured: Vec<PageSummary>,
    pub others: Vec<PageSummary>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub path: String,
    pub label: String,
    pub page: String,
    pub header: Option<String>,
}

#[derive(Serialize)]
pub struct SearchData {
    pub query: String,
    pub limit: usize,
    pub total: usize,
    pub results: Vec<SearchHit>,
}

#[derive(Serialize)]
pub struct RelatedData {
    pub path: String,
    pub count: usize,
    pub related: Vec<PageSummary>,
}

pub fn page_summary(page: &Page) -> PageSummary {
    PageSummary {
        path: page.path.to_string(),
        title: page.title.clone(),
        icon: page.icon.to_string(),
        kind: page.kind().as_str(),
        date: page.iso_date.clone(),
        display_date: dates::display_date(page),
        tags: page.tags().to_vec(),
    }
}

pub fn page_summaries(pages: &[&Page]) -> Vec<PageSummary> {
    pages.iter().map(|page| page_summary(page)).collect()
}

pub fn page_to_payload(page: &Page) -> PageData {
    PageData {
        summary: page_summary(page),
        searchable_title: page.searchable_title.clone(),
        headers: page.headers.clone(),
        frontmatter: page.frontmatter.clone(),
        source_path: page
            .source_path
            .as_ref()
            .map(|path| path.display().to_string()),
    }
}

pub fn search_hit(result: &SearchResult<'_>) -> SearchHit {
    SearchHit {
        path: result.path.clone(),
        label: result.label(),
        page: result.page.path.to_string(),
        header: result.header.map(|header| header.slug.clone()),
    }
}
