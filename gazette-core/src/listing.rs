//! Article listings: newest-first articles, curated featured articles and
//! the remaining "other" articles.
//!
//! Everything here works on borrowed pages. Subsets are compared by identity,
//! never by value, so two distinct pages with equal fields stay distinct.

use crate::config::ThemeConfig;
use crate::dates::{compare_dates_desc, page_date};
use crate::models::Page;

/// Articles of a page collection, newest first
///
/// The sort is stable. Articles without a parseable date keep their
/// relative order and come after every dated article.
pub fn articles<'a>(pages: impl IntoIterator<Item = &'a Page>) -> Vec<&'a Page> {
    let mut dated: Vec<_> = pages
        .into_iter()
        .filter(|page| page.is_article)
        .map(|page| {
            let date = page_date(page);
            if date.is_none() {
                tracing::debug!(path = %page.path, "undated article listed last");
            }
            (date, page)
        })
        .collect();

    dated.sort_by(|(a, _), (b, _)| compare_dates_desc(*a, *b));
    dated.into_iter().map(|(_, page)| page).collect()
}

/// Articles whose date is missing or does not parse, in input order
pub fn undated_articles<'a>(pages: impl IntoIterator<Item = &'a Page>) -> Vec<&'a Page> {
    pages
        .into_iter()
        .filter(|page| page.is_article && page_date(page).is_none())
        .collect()
}

/// Pages whose path appears in `keys`, ordered by their position in `keys`
///
/// Order in `pages` is irrelevant; a key repeated in `keys` counts at its
/// first position and never duplicates a page.
pub fn select_in_order<'a, K: AsRef<str>>(pages: &[&'a Page], keys: &[K]) -> Vec<&'a Page> {
    let position = |page: &Page| keys.iter().position(|k| k.as_ref() == page.path.as_str());

    let mut selected: Vec<(usize, &'a Page)> = pages
        .iter()
        .filter_map(|page| position(page).map(|idx| (idx, *page)))
        .collect();
    selected.sort_by_key(|(idx, _)| *idx);
    selected.into_iter().map(|(_, page)| page).collect()
}

/// `items` minus every element of `to_exclude` (by identity), order preserved
pub fn exclude<'a, T>(items: &[&'a T], to_exclude: &[&T]) -> Vec<&'a T> {
    items
        .iter()
        .copied()
        .filter(|item| !to_exclude.iter().any(|ex| std::ptr::eq(*item, *ex)))
        .collect()
}

/// Curated featured articles, padded with the newest remaining ones
///
/// `all_articles` is expected newest first (see [`articles`]). The curated
/// list is kept in its configured order; if it is shorter than
/// `minimum_featured_articles`, articles not yet featured are appended in
/// `all_articles` order until the minimum is met or none are left.
pub fn featured_articles<'a>(all_articles: &[&'a Page], theme: &ThemeConfig) -> Vec<&'a Page> {
    let mut featured = select_in_order(all_articles, &theme.featured_articles);

    if featured.len() < theme.featured_articles.len() {
        for key in &theme.featured_articles {
            if !featured.iter().any(|page| page.path == key.as_str()) {
                tracing::warn!(path = %key, "featured article not found among articles");
            }
        }
    }

    let minimum = theme.minimum_featured_articles;
    if featured.len() < minimum {
        let padding: Vec<_> = exclude(all_articles, &featured)
            .into_iter()
            .take(minimum - featured.len())
            .collect();
        featured.extend(padding);
    }

    featured
}

/// Articles that are not featured, order preserved
pub fn other_articles<'a>(all_articles: &[&'a Page], featured: &[&Page]) -> Vec<&'a Page> {
    exclude(all_articles, featured)
}
