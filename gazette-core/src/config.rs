//! Configuration parsing and management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    ParseError(#[from] serde_yaml::Error),
}

/// Main configuration struct matching the gazette.yml schema
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub site: SiteConfig,

    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default, alias = "themeConfig")]
    pub theme: ThemeConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    /// Regexes matched against content-relative paths
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    // Internal: path to config file (for relative path resolution)
    #[serde(skip)]
    config_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,

    #[serde(default)]
    pub author: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_content_dir")]
    pub content: PathBuf,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from("content")
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            content: default_content_dir(),
        }
    }
}

/// Curated article selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Article paths to feature, in display order
    #[serde(default, alias = "featuredArticles")]
    pub featured_articles: Vec<String>,

    /// Featured list is padded with recent articles up to this size
    #[serde(
        default = "default_minimum_featured",
        alias = "minimumFeaturedArticles"
    )]
    pub minimum_featured_articles: usize,
}

fn default_minimum_featured() -> usize {
    3
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            featured_articles: Vec::new(),
            minimum_featured_articles: default_minimum_featured(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Result cap for search suggestions; 0 means unlimited
    #[serde(default = "default_max_suggestions", alias = "maxSuggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    crate::search::DEFAULT_MAX_SUGGESTIONS
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagsConfig {
    /// Generate `/tag/` and `/tag/<name>/` index pages
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl Config {
    /// Minimal configuration for a site title and content directory
    pub fn new(title: impl Into<String>, content_dir: impl Into<PathBuf>) -> Self {
        Self {
            site: SiteConfig {
                title: title.into(),
                author: None,
                description: None,
                url: None,
            },
            paths: PathsConfig {
                content: content_dir.into(),
            },
            theme: ThemeConfig::default(),
            search: SearchConfig::default(),
            tags: TagsConfig::default(),
            ignore_patterns: Vec::new(),
            config_path: None,
        }
    }

    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::from_yaml_str(&contents)?;

        // Store config file path for relative path resolution
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Parse configuration from YAML text; relative paths resolve against the cwd
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(contents)?)
    }

    /// Get the content directory, resolved relative to config file
    pub fn content_dir(&self) -> PathBuf {
        self.resolve_path(&self.paths.content)
    }

    /// Resolve a path relative to the config file location
    fn resolve_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            return path.to_path_buf();
        }
        match self.config_path.as_deref().and_then(Path::parent) {
            Some(parent) => parent.join(path),
            None => path.to_path_buf(),
        }
    }

    /// Get a nested config value using dotted path (e.g., "site.title")
    pub fn get(&self, key: &str) -> Option<String> {
        let parts: Vec<&str> = key.split('.').collect();
        match parts.as_slice() {
            ["site", "title"] => Some(self.site.title.clone()),
            ["site", "author"] => self.site.author.clone(),
            ["site", "description"] => self.site.description.clone(),
            ["site", "url"] => self.site.url.clone(),
            ["paths", "content"] => Some(self.paths.content.display().to_string()),
            ["theme", "minimum_featured_articles"] => {
                Some(self.theme.minimum_featured_articles.to_string())
            }
            ["theme", "featured_articles"] => Some(self.theme.featured_articles.join(",")),
            ["search", "max_suggestions"] => Some(self.search.max_suggestions.to_string()),
            ["tags", "enabled"] => Some(self.tags.enabled.to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = Config::from_yaml_str("site:\n  title: Test\n").unwrap();

        assert_eq!(config.paths.content, PathBuf::from("content"));
        assert!(config.theme.featured_articles.is_empty());
        assert_eq!(config.theme.minimum_featured_articles, 3);
        assert_eq!(config.search.max_suggestions, 5);
        assert!(config.tags.enabled);
        assert!(config.ignore_patterns.is_empty());
    }

    #[test]
    fn test_camel_case_theme_keys() {
        let yaml = r#"
site:
  title: Blog
themeConfig:
  featuredArticles:
    - /articles/one.html
    - /articles/two.html
  minimumFeaturedArticles: 4
"#;
        let config = Config::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.theme.featured_articles,
            vec!["/articles/one.html", "/articles/two.html"]
        );
        assert_eq!(config.theme.minimum_featured_articles, 4);
    }

    #[test]
    fn test_get_nested_value() {
        let yaml = r#"
site:
  title: My Blog
  author: Jane Doe
theme:
  featured_articles: [/articles/a.html]
search:
  max_suggestions: 0
"#;
        let config = Config::from_yaml_str(yaml).unwrap();

        assert_eq!(config.get("site.title"), Some("My Blog".into()));
        assert_eq!(config.get("site.author"), Some("Jane Doe".into()));
        assert_eq!(config.get("site.url"), None);
        assert_eq!(
            config.get("theme.featured_articles"),
            Some("/articles/a.html".into())
        );
        assert_eq!(config.get("search.max_suggestions"), Some("0".into()));
        assert_eq!(config.get("nonexistent.key"), None);
    }

    #[test]
    fn test_content_dir_resolves_against_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gazette.yml");
        std::fs::write(&path, "site:\n  title: T\npaths:\n  content: posts\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.content_dir(), dir.path().join("posts"));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = Config::from_file("/definitely/not/here/gazette.yml").unwrap_err();
        assert!(matches!(err, ConfigError::ReadError(_)));
    }
}
