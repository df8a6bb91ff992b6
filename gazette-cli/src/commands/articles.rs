//! Article listings: newest first, by tag, and the featured split.

use super::load_blog;
use crate::agent;
use anyhow::Result;
use gazette_core::{dates, Page};
use std::fmt::Write;
use std::path::Path;

pub fn list_articles(config_path: &Path, tag: Option<&str>, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    let articles = match tag {
        Some(tag) => blog.articles_tagged(tag),
        None => blog.articles(),
    };

    if json {
        let payload = agent::envelope("article.list", agent::page_summaries(&articles));
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else if articles.is_empty() {
        match tag {
            Some(tag) => println!("No articles tagged '{}'", tag),
            None => println!("No articles found"),
        }
    } else {
        print!("{}", render_articles(&articles));
    }
    Ok(())
}

pub fn list_featured(config_path: &Path, json: bool) -> Result<()> {
    let blog = load_blog(config_path)?;
    let featured = blog.featured_articles();
    let others = blog.other_articles();

    if json {
        let payload = agent::envelope(
            "article.featured",
            agent::FeaturedData {
                featured: agent::page_summaries(&featured),
                others: agent::page_summaries(&others),
            },
        );
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Featured:");
        print!("{}", render_articles(&featured));
        println!();
        println!("Other articles:");
        print!("{}", render_articles(&others));
    }
    Ok(())
}

fn render_articles(articles: &[&Page]) -> String {
    let mut out = String::new();
    for page in articles {
        let date = dates::display_date(page).unwrap_or_else(|| "undated".to_string());
        let _ = writeln!(out, "{:<18} {}  {}", date, page.path, page.title);
        if !page.tags().is_empty() {
            let _ = writeln!(out, "{:<18} tags: {}", "", page.tags().join(", "));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_core::{classified, Frontmatter};

    fn article(slug: &str, title: &str, date: Option<&str>, tags: &[&str]) -> Page {
        classified(
            Page::new(format!("/articles/{slug}.html")).with_frontmatter(Frontmatter {
                title: Some(title.to_string()),
                date: date.map(str::to_string),
                tags: tags.iter().map(|t| t.to_string()).collect(),
                ..Frontmatter::default()
            }),
        )
    }

    #[test]
    fn test_render_articles() {
        let pages = [
            article("actions", "Laravel actions", Some("2019-06-01"), &["laravel"]),
            article("notes", "Notes", None, &[]),
        ];
        let refs: Vec<&Page> = pages.iter().collect();

        insta::assert_snapshot!(render_articles(&refs), @r"
        June 1, 2019       /articles/actions.html  Laravel actions
                           tags: laravel
        undated            /articles/notes.html  Notes
        ");
    }
}
