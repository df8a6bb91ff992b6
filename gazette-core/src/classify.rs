//! Page classification: derives category, titles, icon and date from
//! the path and frontmatter of each page.
//!
//! Every lookup has a terminal default, so classification cannot fail.

use crate::models::{non_empty, Page};
use gazette_types::Icon;

/// Display title of the root tag index
pub const TAGS_TITLE: &str = "Tags";

/// Decorate a page in place with its derived fields
///
/// Running it twice yields the same page.
pub fn classify(page: &mut Page) {
    page.is_article = page.path.is_article();
    page.is_tag = page.path.is_tag();

    let title = first_non_empty([
        Some(page.title.as_str()),
        page.path.is_tag_root().then_some(TAGS_TITLE),
        page.frontmatter.title(),
    ])
    .unwrap_or_default()
    .to_string();
    page.title = title;

    page.searchable_title = page
        .frontmatter
        .searchable_title()
        .unwrap_or(&page.title)
        .to_string();

    page.icon = match page.frontmatter.icon() {
        Some(name) => Icon::from(name.to_string()),
        None if page.is_article => Icon::News,
        None if page.is_tag => Icon::Tag,
        None => Icon::Document,
    };

    page.iso_date = page.frontmatter.date.clone();

    tracing::debug!(
        path = %page.path,
        kind = page.kind().as_str(),
        icon = %page.icon,
        "classified page"
    );
}

/// Owned variant of [`classify`]
pub fn classified(mut page: Page) -> Page {
    classify(&mut page);
    page
}

/// Classify every page of a collection
pub fn classify_all(pages: &mut [Page]) {
    pages.iter_mut().for_each(classify);
}

fn first_non_empty<'a, const N: usize>(candidates: [Option<&'a str>; N]) -> Option<&'a str> {
    candidates.into_iter().find_map(non_empty)
}
