//! The blog view service handed to templates and the CLI.
//!
//! `Blog` owns the classified page collection and the theme settings and
//! answers every listing and search question about them. Views receive it
//! explicitly; nothing is registered globally.

use crate::{
    config::{Config, SearchConfig, ThemeConfig},
    listing::{self, articles},
    loader::{LoadError, SiteLoader},
    models::Page,
    random::random_elements_with_rng,
    search::{search, SearchResult},
    tags::{self, TagCount},
};
use rand::Rng;

pub struct Blog {
    pages: Vec<Page>,
    theme: ThemeConfig,
    search: SearchConfig,
}

impl Blog {
    /// Wrap already classified pages
    pub fn new(pages: Vec<Page>, config: &Config) -> Self {
        Self {
            pages,
            theme: config.theme.clone(),
            search: config.search.clone(),
        }
    }

    /// Load and classify the content directory named by `config`
    pub fn load(config: &Config) -> Result<Self, LoadError> {
        let pages = SiteLoader::new(config.clone()).load()?;
        Ok(Self::new(pages, config))
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    pub fn find(&self, path: &str) -> Option<&Page> {
        self.pages.iter().find(|page| page.path == path)
    }

    /// Articles, newest first
    pub fn articles(&self) -> Vec<&Page> {
        articles(&self.pages)
    }

    pub fn featured_articles(&self) -> Vec<&Page> {
        listing::featured_articles(&self.articles(), &self.theme)
    }

    /// Articles not featured, newest first
    pub fn other_articles(&self) -> Vec<&Page> {
        let all = self.articles();
        let featured = listing::featured_articles(&all, &self.theme);
        listing::other_articles(&all, &featured)
    }

    /// Search with the configured suggestion cap
    pub fn search(&self, query: &str) -> Vec<SearchResult<'_>> {
        self.search_with_limit(query, self.search.max_suggestions)
    }

    /// Search with an explicit cap (0 = unlimited)
    pub fn search_with_limit(&self, query: &str, max_suggestions: usize) -> Vec<SearchResult<'_>> {
        search(&self.pages, query, max_suggestions)
    }

    pub fn tags(&self) -> Vec<TagCount> {
        tags::tag_counts(&self.articles())
    }

    pub fn articles_tagged(&self, tag: &str) -> Vec<&Page> {
        tags::articles_tagged(&self.articles(), tag)
    }

    /// Up to `count` random articles other than `path`
    pub fn related(&self, path: &str, count: usize) -> Vec<&Page> {
        self.related_with_rng(path, count, &mut rand::thread_rng())
    }

    /// Articles sharing a tag with `path` are drawn first; the remainder is
    /// filled from the other articles
    pub fn related_with_rng<R>(&self, path: &str, count: usize, rng: &mut R) -> Vec<&Page>
    where
        R: Rng + ?Sized,
    {
        let current = self.find(path);
        let candidates: Vec<&Page> = self
            .articles()
            .into_iter()
            .filter(|page| page.path != path)
            .collect();

        let current_routes: Vec<String> = current
            .map(|page| page.tags().iter().filter_map(|t| tags::tag_path(t.trim())).collect())
            .unwrap_or_default();
        let shares_tag = |page: &Page| {
            page.tags()
                .iter()
                .filter_map(|t| tags::tag_path(t.trim()))
                .any(|route| current_routes.contains(&route))
        };
        let (same_topic, rest): (Vec<&Page>, Vec<&Page>) =
            candidates.into_iter().partition(|page| shares_tag(*page));

        let mut related: Vec<&Page> = random_elements_with_rng(&same_topic, count, rng)
            .into_iter()
            .copied()
            .collect();
        if related.len() < count {
            let missing = count - related.len();
            related.extend(random_elements_with_rng(&rest, missing, rng).into_iter().copied());
        }
        related
    }
}
