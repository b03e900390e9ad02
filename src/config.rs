//! Loads the site configuration from the JSON files in a project's `config/`
//! directory:
//!
//! * `site.json` holds the site metadata ([`SiteMetadata`]),
//! * `categories.json` holds the array of [`CategoryConfig`] records,
//! * `theme.json` (optional) holds the [`Theme`] tokens.
//!
//! Configuration problems are fatal: they indicate a structural
//! misconfiguration of the site rather than one bad article.

use crate::article::Category;
use crate::util::{self, ReadError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

/// The directory, relative to the project root, holding the config files.
pub const CONFIG_DIRECTORY: &str = "config";
const SITE_FILE: &str = "site.json";
const CATEGORIES_FILE: &str = "categories.json";
const THEME_FILE: &str = "theme.json";

/// The editorial byline used when neither the site nor an article names an
/// author.
pub const DEFAULT_AUTHOR: &str = "ServerHi Team";

fn default_author() -> String {
    DEFAULT_AUTHOR.to_owned()
}

fn default_content_directory() -> PathBuf {
    PathBuf::from("content/articles")
}

/// Site-wide metadata from `site.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SiteMetadata {
    pub name: String,
    pub title: String,
    pub description: String,

    /// The absolute base URL of the published site. Always ends in `/` once
    /// loaded so that relative routes can be joined onto it.
    pub url: Url,

    #[serde(default = "default_author")]
    pub author: String,

    /// The number of articles per listing page.
    pub page_size: usize,

    /// The number of "see also" articles shown under an article.
    pub related_count: usize,

    /// Where the article bundles live, relative to the project root.
    #[serde(default = "default_content_directory")]
    pub content_directory: PathBuf,
}

/// A category definition from `categories.json`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub color: String,
    pub icon: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

/// Theme tokens from `theme.json`. A missing file yields the defaults.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    #[serde(default)]
    pub colors: BTreeMap<String, String>,

    #[serde(default)]
    pub fonts: BTreeMap<String, String>,

    #[serde(default)]
    pub default_mode: ThemeMode,
}

impl Theme {
    pub fn color(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(String::as_str)
    }

    pub fn font(&self, token: &str) -> Option<&str> {
        self.fonts.get(token).map(String::as_str)
    }
}

/// The loaded and checked project configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// The project root (the parent of the `config/` directory).
    pub root_directory: PathBuf,
    pub site: SiteMetadata,
    pub categories: Vec<CategoryConfig>,
    pub theme: Theme,
}

impl Config {
    /// Searches `dir` and each of its ancestors for `config/site.json` and
    /// loads the first project found.
    pub fn from_directory(dir: &Path) -> Result<Config> {
        for candidate in dir.ancestors() {
            let config_directory = candidate.join(CONFIG_DIRECTORY);
            if config_directory.join(SITE_FILE).is_file() {
                return Config::from_config_directory(&config_directory);
            }
        }
        Err(ConfigError::NotFound(dir.to_owned()))
    }

    /// Loads the configuration files in `config_directory`. The project root
    /// is taken to be the parent of `config_directory`.
    pub fn from_config_directory(config_directory: &Path) -> Result<Config> {
        let site: SiteMetadata = parse_file(&config_directory.join(SITE_FILE), "site config")?;
        let categories: Vec<CategoryConfig> =
            parse_file(&config_directory.join(CATEGORIES_FILE), "categories")?;

        let theme_path = config_directory.join(THEME_FILE);
        let theme: Theme = if theme_path.is_file() {
            parse_file(&theme_path, "theme")?
        } else {
            Theme::default()
        };

        let root_directory = config_directory
            .parent()
            .map(Path::to_owned)
            .unwrap_or_default();
        Config::from_parts(root_directory, site, categories, theme)
    }

    /// Builds a [`Config`] from already-deserialized parts, checking the
    /// values serde can't: non-empty strings, a positive page size, and
    /// unique category slugs drawn from [`Category::ALL`].
    pub fn from_parts(
        root_directory: PathBuf,
        mut site: SiteMetadata,
        categories: Vec<CategoryConfig>,
        theme: Theme,
    ) -> Result<Config> {
        require_text("name", &site.name)?;
        require_text("title", &site.title)?;
        require_text("description", &site.description)?;
        if site.page_size == 0 {
            return Err(ConfigError::InvalidValue {
                key: "pageSize".to_owned(),
                reason: "must be greater than zero".to_owned(),
            });
        }
        if site.url.cannot_be_a_base() {
            return Err(ConfigError::InvalidValue {
                key: "url".to_owned(),
                reason: format!("`{}` can't be used as a base URL", site.url),
            });
        }
        if !site.url.path().ends_with('/') {
            let path = format!("{}/", site.url.path());
            site.url.set_path(&path);
        }

        let mut seen = HashSet::new();
        for (i, category) in categories.iter().enumerate() {
            let field = |name: &str| format!("categories[{}].{}", i, name);
            require_text(&field("slug"), &category.slug)?;
            require_text(&field("name"), &category.name)?;
            require_text(&field("description"), &category.description)?;
            require_text(&field("color"), &category.color)?;
            require_text(&field("icon"), &category.icon)?;
            if category.slug.parse::<Category>().is_err() {
                return Err(ConfigError::InvalidValue {
                    key: field("slug"),
                    reason: format!("`{}` is not a known category", category.slug),
                });
            }
            if !seen.insert(category.slug.as_str()) {
                return Err(ConfigError::DuplicateCategory(category.slug.clone()));
            }
        }

        Ok(Config {
            root_directory,
            site,
            categories,
            theme,
        })
    }

    /// Looks up a configured category by slug.
    pub fn category(&self, slug: &str) -> Option<&CategoryConfig> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// The absolute (or root-relative) path of the article content store.
    pub fn content_directory(&self) -> PathBuf {
        self.root_directory.join(&self.site.content_directory)
    }

    pub fn page_size(&self) -> usize {
        self.site.page_size
    }

    pub fn related_count(&self) -> usize {
        self.site.related_count
    }
}

fn parse_file<T: DeserializeOwned>(path: &Path, kind: &'static str) -> Result<T> {
    let contents = util::read(path, kind)?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        kind,
        path: path.to_owned(),
        source,
    })
}

fn require_text(key: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            reason: "must not be empty".to_owned(),
        })
    } else {
        Ok(())
    }
}

/// The result of a configuration operation.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Represents a fatal configuration problem.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No `config/site.json` exists in the directory or its ancestors.
    #[error(
        "could not find `{}/{}` in `{}` or any parent directory",
        CONFIG_DIRECTORY,
        SITE_FILE,
        .0.display()
    )]
    NotFound(PathBuf),

    /// A config file couldn't be read.
    #[error(transparent)]
    Read(#[from] ReadError),

    /// A config file isn't valid JSON or is missing a required key.
    #[error("parsing {kind} file `{}`: {source}", .path.display())]
    Parse {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A key is present but its value is unusable.
    #[error("invalid value for `{key}`: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Two categories share a slug.
    #[error("duplicate category slug `{0}` in {file}", file = CATEGORIES_FILE)]
    DuplicateCategory(String),

    /// An article names a category that the categories file doesn't define.
    #[error(
        "article `{article}` references category `{category}`, which is not defined in {file}",
        file = CATEGORIES_FILE
    )]
    UndefinedCategory { article: String, category: String },
}
