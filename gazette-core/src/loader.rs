//! Content loading: turns a directory of markdown files into classified pages.

use crate::{
    classify::{classified, classify_all},
    config::Config,
    frontmatter::{parse_frontmatter, FrontmatterError},
    listing::{articles, undated_articles},
    models::{Frontmatter, Page},
    slug::slugify,
    tags::tag_counts,
};
use gazette_types::{Header, PagePath, TAG_PREFIX};
use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Content directory not found: {}", .0.display())]
    MissingContentDir(PathBuf),

    #[error("Frontmatter error in {}: {}", .path.display(), .source)]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: FrontmatterError,
    },

    #[error("Duplicate route {}: {} and {}", .route, .first.display(), .second.display())]
    DuplicateRoute {
        route: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Loads and classifies every page of a site
pub struct SiteLoader {
    config: Config,
}

impl SiteLoader {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load all pages, classified and sorted by path
    pub fn load(&self) -> Result<Vec<Page>, LoadError> {
        let content_dir = self.config.content_dir();
        if !content_dir.is_dir() {
            return Err(LoadError::MissingContentDir(content_dir));
        }

        let markdown_files = self.discover_markdown_files(&content_dir)?;
        tracing::info!("Found {} markdown files", markdown_files.len());

        let mut pages = Vec::new();
        let mut routes: HashMap<String, PathBuf> = HashMap::new();

        for file_path in &markdown_files {
            let page = match self.parse_page(&content_dir, file_path) {
                Ok(page) => page,
                Err(err @ LoadError::Frontmatter { .. }) => {
                    tracing::error!("Skipping page: {}", err);
                    continue;
                }
                Err(err) => return Err(err),
            };

            if page.is_draft() {
                tracing::debug!("Skipping draft {}", page.path);
                continue;
            }

            if let Some(first) = routes.get(page.path.as_str()) {
                return Err(LoadError::DuplicateRoute {
                    route: page.path.to_string(),
                    first: first.clone(),
                    second: file_path.clone(),
                });
            }
            routes.insert(page.path.to_string(), file_path.clone());
            pages.push(page);
        }

        classify_all(&mut pages);

        for page in undated_articles(&pages) {
            tracing::warn!(
                path = %page.path,
                date = ?page.iso_date,
                "article has no usable date, listing it last"
            );
        }

        if self.config.tags.enabled {
            let generated = tag_index_pages(&pages, &routes);
            tracing::debug!("Generated {} tag index pages", generated.len());
            pages.extend(generated);
        }

        pages.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::info!("Loaded {} pages", pages.len());
        Ok(pages)
    }

    /// Discover all markdown files below the content directory, skipping
    /// hidden entries and ignore patterns
    fn discover_markdown_files(&self, content_dir: &Path) -> Result<Vec<PathBuf>, LoadError> {
        let ignore_patterns = compile_ignore_patterns(&self.config.ignore_patterns);
        let mut files = Vec::new();

        let walker = WalkDir::new(content_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_file()
                || entry.path().extension().map_or(true, |ext| ext != "md")
            {
                continue;
            }

            let rel = relative_str(entry.path(), content_dir);
            if should_ignore(&rel, &ignore_patterns) {
                tracing::debug!("Ignoring {} due to ignore_patterns", rel);
                continue;
            }

            files.push(entry.into_path());
        }

        Ok(files)
    }

    /// Parse a single markdown file into an unclassified page
    fn parse_page(&self, content_dir: &Path, path: &Path) -> Result<Page, LoadError> {
        let content = fs::read_to_string(path)?;
        let (frontmatter, body) =
            parse_frontmatter(&content).map_err(|source| LoadError::Frontmatter {
                path: path.to_path_buf(),
                source,
            })?;

        let rel = path.strip_prefix(content_dir).unwrap_or(path);
        let route = route_for(rel, &frontmatter);
        let (first_h1, headers) = scan_headings(&body);

        // The generator title: explicit frontmatter title, else the first H1
        let title = frontmatter
            .title()
            .map(str::to_string)
            .or(first_h1)
            .unwrap_or_default();

        tracing::debug!("Loaded {} from {}", route, rel.display());

        let mut page = Page::new(route)
            .with_frontmatter(frontmatter)
            .with_title(title)
            .with_headers(headers);
        page.source_path = Some(rel.to_path_buf());
        Ok(page)
    }
}

/// Route of a content file
///
/// `README.md` and `index.md` map to their directory (`/articles/`),
/// everything else to `<dir>/<stem>.html`. A frontmatter permalink wins.
pub fn route_for(rel_path: &Path, frontmatter: &Frontmatter) -> PagePath {
    if let Some(permalink) = frontmatter
        .permalink
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
    {
        return PagePath::new(normalize_permalink(permalink));
    }

    let dirs: Vec<String> = rel_path
        .parent()
        .map(|parent| {
            parent
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default();

    let dir = if dirs.is_empty() {
        "/".to_string()
    } else {
        format!("/{}/", dirs.join("/"))
    };

    let stem = rel_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    if stem.eq_ignore_ascii_case("readme") || stem.eq_ignore_ascii_case("index") {
        PagePath::new(dir)
    } else {
        PagePath::new(format!("{dir}{stem}.html"))
    }
}

fn normalize_permalink(permalink: &str) -> String {
    if permalink.starts_with('/') {
        permalink.to_string()
    } else {
        format!("/{permalink}")
    }
}

/// First H1 text and every H2/H3 as a header
///
/// Header slugs come from an explicit `{#id}` attribute when present.
fn scan_headings(markdown: &str) -> (Option<String>, Vec<Header>) {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut first_h1 = None;
    let mut headers = Vec::new();
    let mut current: Option<(HeadingLevel, Option<String>, String)> = None;

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                current = Some((level, id.map(|id| id.to_string()), String::new()));
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some((_, _, title)) = current.as_mut() {
                    title.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                let Some((level, id, title)) = current.take() else {
                    continue;
                };
                let title = title.trim().to_string();
                match level {
                    HeadingLevel::H1 => {
                        if first_h1.is_none() && !title.is_empty() {
                            first_h1 = Some(title);
                        }
                    }
                    HeadingLevel::H2 | HeadingLevel::H3 => {
                        let slug = id.unwrap_or_else(|| slugify(&title));
                        headers.push(Header {
                            title,
                            slug,
                            level: level as u8,
                        });
                    }
                    _ => {}
                }
            }
            _ => {}
        }
    }

    (first_h1, headers)
}

/// `/tag/` plus one `/tag/<slug>/` page per article tag, skipping routes
/// an authored page already owns
fn tag_index_pages(pages: &[Page], routes: &HashMap<String, PathBuf>) -> Vec<Page> {
    let mut generated = Vec::new();

    if !routes.contains_key(TAG_PREFIX) {
        generated.push(classified(Page::new(TAG_PREFIX)));
    }

    for tag in tag_counts(&articles(pages)) {
        if routes.contains_key(&tag.path) {
            continue;
        }
        let page = Page::new(tag.path).with_title(tag.name);
        generated.push(classified(page));
    }

    generated
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

fn relative_str(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

fn compile_ignore_patterns(patterns: &[String]) -> Vec<Regex> {
    let mut compiled = Vec::new();
    for pat in patterns {
        match Regex::new(pat) {
            Ok(re) => compiled.push(re),
            Err(err) => tracing::warn!("Invalid ignore pattern '{}': {}", pat, err),
        }
    }
    compiled
}

fn should_ignore(path: &str, ignores: &[Regex]) -> bool {
    ignores.iter().any(|re| re.is_match(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gazette_types::Icon;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn site() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        let content = dir.path();
        write(content, "README.md", "# Home\n\nWelcome.");
        write(content, "articles/README.md", "---\ntitle: Articles\n---\n");
        write(
            content,
            "articles/rust-basics.md",
            "---\ntitle: Rust Basics\ndate: 2019-03-01\ntags: [rust]\n---\n\n## Intro\n\n### Ownership {#own}\n\n#### Deep\n",
        );
        write(
            content,
            "articles/vue-tips.md",
            "---\ndate: 2019-04-01\ntags: [Vue, rust]\n---\n# Vue `tips`\n\n## Props\n",
        );
        write(content, "cv/index.md", "---\ntitle: CV\nsearchableTitle: Curriculum\n---\n");
        write(content, ".vuepress/config.md", "# hidden\n");
        write(content, "notes.txt", "not markdown");
        dir
    }

    fn load(dir: &Path) -> Vec<Page> {
        SiteLoader::new(Config::new("Test", dir)).load().unwrap()
    }

    fn find<'a>(pages: &'a [Page], path: &str) -> &'a Page {
        pages
            .iter()
            .find(|p| p.path == path)
            .unwrap_or_else(|| panic!("missing page {path}"))
    }

    #[test]
    fn test_route_for() {
        let fm = Frontmatter::default();
        assert_eq!(route_for(Path::new("README.md"), &fm), "/");
        assert_eq!(route_for(Path::new("articles/README.md"), &fm), "/articles/");
        assert_eq!(route_for(Path::new("cv/index.md"), &fm), "/cv/");
        assert_eq!(
            route_for(Path::new("articles/rust.md"), &fm),
            "/articles/rust.html"
        );
        assert_eq!(route_for(Path::new("about.md"), &fm), "/about.html");

        let fm = Frontmatter {
            permalink: Some("articles/custom/".into()),
            ..Frontmatter::default()
        };
        assert_eq!(route_for(Path::new("drafts/x.md"), &fm), "/articles/custom/");
    }

    #[test]
    fn test_scan_headings() {
        let (h1, headers) =
            scan_headings("# Title\n\n## First *part*\n\n### Second {#custom}\n\n#### Skipped\n\n# Later\n");
        assert_eq!(h1.as_deref(), Some("Title"));
        assert_eq!(
            headers,
            vec![
                Header {
                    title: "First part".into(),
                    slug: "first-part".into(),
                    level: 2
                },
                Header {
                    title: "Second".into(),
                    slug: "custom".into(),
                    level: 3
                },
            ]
        );
    }

    #[test]
    fn test_load_site() {
        let dir = site();
        let pages = load(dir.path());

        let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "/",
                "/articles/",
                "/articles/rust-basics.html",
                "/articles/vue-tips.html",
                "/cv/",
                "/tag/",
                "/tag/rust/",
                "/tag/vue/",
            ]
        );

        let home = find(&pages, "/");
        assert_eq!(home.title, "Home");
        assert_eq!(home.icon, Icon::Document);

        let rust = find(&pages, "/articles/rust-basics.html");
        assert!(rust.is_article);
        assert_eq!(rust.icon, Icon::News);
        assert_eq!(rust.iso_date.as_deref(), Some("2019-03-01"));
        assert_eq!(rust.source_path, Some(PathBuf::from("articles/rust-basics.md")));
        assert_eq!(
            rust.headers
                .iter()
                .map(|h| h.slug.as_str())
                .collect::<Vec<_>>(),
            vec!["intro", "own"]
        );

        let vue = find(&pages, "/articles/vue-tips.html");
        assert_eq!(vue.title, "Vue tips");

        let cv = find(&pages, "/cv/");
        assert_eq!(cv.searchable_title, "Curriculum");

        let tags = find(&pages, "/tag/");
        assert_eq!(tags.title, "Tags");
        assert_eq!(tags.icon, Icon::Tag);

        let rust_tag = find(&pages, "/tag/rust/");
        assert_eq!(rust_tag.title, "rust");
        assert!(rust_tag.is_tag);
    }

    #[test]
    fn test_site_outline() {
        let dir = site();
        let outline: String = load(dir.path())
            .iter()
            .map(|p| format!("{} {} {:?}\n", p.icon, p.path, p.title))
            .collect();

        insta::assert_snapshot!(outline, @r#"
        document / "Home"
        document /articles/ "Articles"
        news /articles/rust-basics.html "Rust Basics"
        news /articles/vue-tips.html "Vue tips"
        document /cv/ "CV"
        tag /tag/ "Tags"
        tag /tag/rust/ "rust"
        tag /tag/vue/ "Vue"
        "#);
    }

    #[test]
    fn test_tag_pages_have_unique_routes() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "articles/cpp.md",
            "---\ntitle: Templates\ndate: 2019-03-01\ntags: [C++]\n---\n",
        );
        write(
            dir.path(),
            "articles/c.md",
            "---\ntitle: Pointers\ndate: 2019-02-01\ntags: [C]\n---\n",
        );
        write(
            dir.path(),
            "articles/loud.md",
            "---\ntitle: Loud\ndate: 2019-01-01\ntags: ['!!!']\n---\n",
        );

        let pages = load(dir.path());
        let tag_routes: Vec<&str> = pages
            .iter()
            .filter(|p| p.is_tag)
            .map(|p| p.path.as_str())
            .collect();
        assert_eq!(tag_routes, vec!["/tag/", "/tag/c/"]);

        let mut routes: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
        routes.dedup();
        assert_eq!(routes.len(), pages.len());

        assert_eq!(find(&pages, "/tag/c/").title, "C++");
    }

    #[test]
    fn test_tags_disabled() {
        let dir = site();
        let mut config = Config::new("Test", dir.path());
        config.tags.enabled = false;
        let pages = SiteLoader::new(config).load().unwrap();
        assert!(pages.iter().all(|p| !p.is_tag));
    }

    #[test]
    fn test_ignore_patterns_and_drafts() {
        let dir = site();
        write(dir.path(), "articles/wip.md", "---\ndraft: true\n---\n");
        let mut config = Config::new("Test", dir.path());
        config.ignore_patterns = vec!["^cv/".into(), "[invalid".into()];
        let pages = SiteLoader::new(config).load().unwrap();

        assert!(pages.iter().all(|p| p.path != "/cv/"));
        assert!(pages.iter().all(|p| p.path != "/articles/wip.html"));
    }

    #[test]
    fn test_bad_frontmatter_is_skipped() {
        let dir = site();
        write(dir.path(), "articles/broken.md", "---\ntitle: [unclosed\n---\n");
        let pages = load(dir.path());
        assert!(pages.iter().all(|p| p.path != "/articles/broken.html"));
        assert!(pages.iter().any(|p| p.path == "/articles/rust-basics.html"));
    }

    #[test]
    fn test_duplicate_route_is_an_error() {
        let dir = site();
        write(dir.path(), "about.md", "---\npermalink: /cv/\n---\n");
        let err = SiteLoader::new(Config::new("Test", dir.path()))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::DuplicateRoute { ref route, .. } if route == "/cv/"));
    }

    #[test]
    fn test_missing_content_dir() {
        let err = SiteLoader::new(Config::new("Test", "/no/such/dir"))
            .load()
            .unwrap_err();
        assert!(matches!(err, LoadError::MissingContentDir(_)));
    }
}
