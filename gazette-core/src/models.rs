//! Page model: frontmatter and routable pages.

use gazette_types::{Header, Icon, PageKind, PagePath};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Frontmatter metadata authored alongside a page
///
/// Only the keys gazette reads are typed; everything else lands in `extra`
/// untouched so downstream templates can still see it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Title variant used for search matching
    #[serde(
        default,
        rename = "searchableTitle",
        alias = "searchable_title",
        skip_serializing_if = "Option::is_none"
    )]
    pub searchable_title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Publication date, kept as authored
    #[serde(
        default,
        deserialize_with = "scalar_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub date: Option<String>,

    #[serde(
        default,
        deserialize_with = "one_or_many",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink: Option<String>,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draft: bool,

    /// Any other author-supplied keys
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Frontmatter {
    pub fn title(&self) -> Option<&str> {
        non_empty(self.title.as_deref())
    }

    pub fn searchable_title(&self) -> Option<&str> {
        non_empty(self.searchable_title.as_deref())
    }

    pub fn icon(&self) -> Option<&str> {
        non_empty(self.icon.as_deref())
    }
}

pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// Dates may be authored as strings, bare numbers (`date: 2019`) or null
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None => Ok(None),
        Some(value) => scalar_to_string(value).map_err(de::Error::custom),
    }
}

/// `tags: rust`, `tags: [rust, web]` and `tags: [vue, 2019]` are all accepted
fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_yaml::Value>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(serde_yaml::Value::Sequence(items)) => {
            let mut tags = Vec::with_capacity(items.len());
            for item in items {
                if let Some(tag) = scalar_to_string(item).map_err(de::Error::custom)? {
                    tags.push(tag);
                }
            }
            Ok(tags)
        }
        Some(value) => Ok(scalar_to_string(value)
            .map_err(de::Error::custom)?
            .into_iter()
            .collect()),
    }
}

fn scalar_to_string(value: serde_yaml::Value) -> Result<Option<String>, String> {
    match value {
        serde_yaml::Value::Null => Ok(None),
        serde_yaml::Value::String(s) => Ok(Some(s)),
        serde_yaml::Value::Number(n) => Ok(Some(n.to_string())),
        serde_yaml::Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(format!("expected a scalar value, found {:?}", other)),
    }
}

/// A single routable document
///
/// The derived fields (`searchable_title`, `icon`, `is_article`, `is_tag`,
/// `iso_date`) are only meaningful after [`crate::classify::classify`] ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Unique routing key (e.g. "/articles/rust-basics.html")
    pub path: PagePath,

    /// Author metadata; empty when the page had none
    #[serde(default)]
    pub frontmatter: Frontmatter,

    /// Display title
    #[serde(default)]
    pub title: String,

    /// Title used for search matching
    #[serde(default)]
    pub searchable_title: String,

    #[serde(default)]
    pub icon: Icon,

    #[serde(default)]
    pub is_article: bool,

    #[serde(default)]
    pub is_tag: bool,

    /// Raw `date` frontmatter value
    #[serde(default)]
    pub iso_date: Option<String>,

    /// In-page sections, in document order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub headers: Vec<Header>,

    /// Source file relative to the content directory (none for generated pages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_path: Option<PathBuf>,
}

impl Page {
    pub fn new(path: impl Into<PagePath>) -> Self {
        Self {
            path: path.into(),
            frontmatter: Frontmatter::default(),
            title: String::new(),
            searchable_title: String::new(),
            icon: Icon::default(),
            is_article: false,
            is_tag: false,
            iso_date: None,
            headers: Vec::new(),
            source_path: None,
        }
    }

    pub fn with_frontmatter(mut self, frontmatter: Frontmatter) -> Self {
        self.frontmatter = frontmatter;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_headers(mut self, headers: Vec<Header>) -> Self {
        self.headers = headers;
        self
    }

    pub fn kind(&self) -> PageKind {
        if self.is_article {
            PageKind::Article
        } else if self.is_tag {
            PageKind::Tag
        } else {
            PageKind::Other
        }
    }

    pub fn tags(&self) -> &[String] {
        &self.frontmatter.tags
    }

    pub fn is_draft(&self) -> bool {
        self.frontmatter.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontmatter_known_and_extra_keys() {
        let yaml = r#"
title: Rust Basics
searchableTitle: Rust basics for beginners
date: 2019-03-01
tags: [rust, beginners]
cover: /images/rust.png
"#;
        let fm: Frontmatter = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(fm.title(), Some("Rust Basics"));
        assert_eq!(fm.searchable_title(), Some("Rust basics for beginners"));
        assert_eq!(fm.date.as_deref(), Some("2019-03-01"));
        assert_eq!(fm.tags, vec!["rust", "beginners"]);
        assert_eq!(
            fm.extra.get("cover"),
            Some(&serde_yaml::Value::String("/images/rust.png".into()))
        );
    }

    #[test]
    fn test_frontmatter_scalar_dates_and_single_tag() {
        let fm: Frontmatter = serde_yaml::from_str("date: 2019\ntags: rust\n").unwrap();
        assert_eq!(fm.date.as_deref(), Some("2019"));
        assert_eq!(fm.tags, vec!["rust"]);

        let fm: Frontmatter = serde_yaml::from_str("date: ~\ntags: ~\n").unwrap();
        assert_eq!(fm.date, None);
        assert!(fm.tags.is_empty());
    }

    #[test]
    fn test_tag_lists_accept_scalars() {
        let fm: Frontmatter =
            serde_yaml::from_str("title: Release notes\ntags: [vue, 2019, true, ~]\n").unwrap();
        assert_eq!(fm.tags, vec!["vue", "2019", "true"]);
        assert_eq!(fm.title(), Some("Release notes"));

        let fm: Frontmatter = serde_yaml::from_str("tags: 2019\n").unwrap();
        assert_eq!(fm.tags, vec!["2019"]);

        assert!(serde_yaml::from_str::<Frontmatter>("tags: [[nested]]\n").is_err());
    }

    #[test]
    fn test_empty_strings_are_treated_as_missing() {
        let fm = Frontmatter {
            title: Some(String::new()),
            icon: Some(String::new()),
            ..Frontmatter::default()
        };
        assert_eq!(fm.title(), None);
        assert_eq!(fm.icon(), None);
    }

    #[test]
    fn test_page_kind() {
        let mut page = Page::new("/articles/a.html");
        assert_eq!(page.kind(), PageKind::Other);
        page.is_article = true;
        assert_eq!(page.kind(), PageKind::Article);
        page.is_article = false;
        page.is_tag = true;
        assert_eq!(page.kind(), PageKind::Tag);
    }

    #[test]
    fn test_page_deserializes_with_missing_frontmatter() {
        let page: Page = serde_json::from_str(r#"{"path": "/about.html"}"#).unwrap();
        assert_eq!(page.path, "/about.html");
        assert_eq!(page.frontmatter, Frontmatter::default());
        assert!(page.headers.is_empty());
    }
}
