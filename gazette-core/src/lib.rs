//! # gazette-core
//!
//! Page model for the gazette blog.
//!
//! This crate classifies pages (articles, tag indexes, everything else),
//! derives their display fields from frontmatter, and provides the listing,
//! search and sampling helpers a blog theme needs. [`Blog`] bundles them
//! as a service passed explicitly to views.

pub mod blog;
pub mod classify;
pub mod config;
pub mod dates;
pub mod frontmatter;
pub mod listing;
pub mod loader;
pub mod models;
pub mod random;
pub mod search;
pub mod slug;
pub mod tags;

pub use blog::Blog;
pub use classify::{classified, classify};
pub use config::Config;
pub use loader::{LoadError, SiteLoader};
pub use models::{Frontmatter, Page};
pub use search::{search, SearchResult, DEFAULT_MAX_SUGGESTIONS};
pub use slug::slugify;
pub use tags::TagCount;
