//! Shared types for gazette
//!
//! This crate provides the small value types used across the gazette
//! crates: routing paths, in-page headers and page icons.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix every article route lives under
pub const ARTICLES_PREFIX: &str = "/articles/";

/// Prefix every tag index route lives under
pub const TAG_PREFIX: &str = "/tag/";

/// Routing path of a page (e.g. "/articles/rust-basics.html")
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PagePath(pub String);

impl PagePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Article routes live under `/articles/`, but the listing page itself is not one
    pub fn is_article(&self) -> bool {
        self.0.starts_with(ARTICLES_PREFIX) && self.0 != ARTICLES_PREFIX
    }

    /// Tag routes: the tag index and every per-tag listing
    pub fn is_tag(&self) -> bool {
        self.0.starts_with(TAG_PREFIX)
    }

    /// The root tag index (`/tag/`)
    pub fn is_tag_root(&self) -> bool {
        self.0 == TAG_PREFIX
    }

    /// Deep link to an anchor within this page
    pub fn with_anchor(&self, slug: &str) -> String {
        format!("{}#{}", self.0, slug)
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PagePath {
    fn from(path: &str) -> Self {
        PagePath(path.to_string())
    }
}

impl From<String> for PagePath {
    fn from(path: String) -> Self {
        PagePath(path)
    }
}

impl PartialEq<str> for PagePath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PagePath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A named anchor within a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Heading text
    pub title: String,

    /// Anchor id used in deep links
    pub slug: String,

    /// Heading level (2 for `##`, 3 for `###`)
    #[serde(default = "default_level")]
    pub level: u8,
}

fn default_level() -> u8 {
    2
}

impl Header {
    pub fn new(title: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slug: slug.into(),
            level: default_level(),
        }
    }
}

/// Icon shown next to a page in listings and search suggestions
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    News,
    Tag,
    #[default]
    Document,
    /// Explicit icon name from frontmatter
    Custom(String),
}

impl Icon {
    pub fn as_str(&self) -> &str {
        match self {
            Icon::News => "news",
            Icon::Tag => "tag",
            Icon::Document => "document",
            Icon::Custom(name) => name,
        }
    }
}

impl From<String> for Icon {
    fn from(name: String) -> Self {
        match name.as_str() {
            "news" => Icon::News,
            "tag" => Icon::Tag,
            "document" => Icon::Document,
            _ => Icon::Custom(name),
        }
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        match icon {
            Icon::Custom(name) => name,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category a page falls into after classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    Article,
    Tag,
    Other,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Article => "article",
            PageKind::Tag => "tag",
            PageKind::Other => "other",
        }
    }
}
