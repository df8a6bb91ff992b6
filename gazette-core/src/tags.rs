//! Tag aggregation over articles.

use crate::models::Page;
use crate::slug::slugify;
use gazette_types::TAG_PREFIX;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// A tag and how many articles carry it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: usize,
    /// Route of the tag's index page
    pub path: String,
}

/// Route of a tag's index page (`/tag/<slug>/`)
///
/// `None` when the tag has no characters that survive slugging (`!!!`).
pub fn tag_path(tag: &str) -> Option<String> {
    let slug = slugify(tag);
    if slug.is_empty() {
        None
    } else {
        Some(format!("{}{}/", TAG_PREFIX, slug))
    }
}

/// Tags used by `articles`, most used first, then by name
///
/// Tags are keyed by their route: spellings that slug alike (`Vue`, `vue`,
/// `C++` and `C`) merge under the first spelling seen, and an article counts
/// once per route. Tags without a route are dropped.
pub fn tag_counts(articles: &[&Page]) -> Vec<TagCount> {
    let mut counts: BTreeMap<String, (String, usize)> = BTreeMap::new();

    for page in articles {
        let mut seen = BTreeSet::new();
        for tag in page.tags() {
            let tag = tag.trim();
            let Some(path) = tag_path(tag) else {
                if !tag.is_empty() {
                    tracing::debug!(tag, page = %page.path, "tag has no route, ignoring");
                }
                continue;
            };
            if !seen.insert(path.clone()) {
                continue;
            }
            counts
                .entry(path)
                .or_insert_with(|| (tag.to_string(), 0))
                .1 += 1;
        }
    }

    let mut tags: Vec<TagCount> = counts
        .into_iter()
        .map(|(path, (name, count))| TagCount { name, count, path })
        .collect();
    tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    tags
}

/// Articles carrying `tag` or any spelling sharing its route, order preserved
pub fn articles_tagged<'a>(articles: &[&'a Page], tag: &str) -> Vec<&'a Page> {
    let Some(path) = tag_path(tag.trim()) else {
        return Vec::new();
    };
    articles
        .iter()
        .copied()
        .filter(|page| {
            page.tags()
                .iter()
                .any(|t| tag_path(t.trim()).as_deref() == Some(path.as_str()))
        })
        .collect()
}
