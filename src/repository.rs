//! Defines the [`ContentRepository`], which loads every article from the
//! content store once, and the [`Catalog`] it produces, which answers the
//! queries page templates need.
//!
//! The content store is a directory holding one entry per article:
//!
//! ```text
//! content/articles/
//! ├── docker-compose-basics/     # bundle: slug = directory name
//! │   ├── index.md
//! │   └── cover.png
//! └── github-actions-deploy.md   # loose file: slug = file stem
//! ```
//!
//! Loading is tolerant at the granularity of one article: a file that can't
//! be read, parsed, or validated is logged, recorded in
//! [`Catalog::rejected`], and left out, while the rest of the collection
//! still loads. Structural problems (a duplicate slug, a category missing
//! from `categories.json`, an unreadable content directory) fail the whole
//! load.

use crate::article::{Article, Category};
use crate::config::{Config, ConfigError};
use crate::frontmatter;
use crate::page::{self, Page};
use crate::schema::{self, ValidationErrors};
use crate::util::{self, ReadError};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

const MARKDOWN_EXTENSION: &str = "md";
const BUNDLE_INDEX: &str = "index.md";

/// Whether drafts may be looked up by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuildMode {
    /// Drafts are invisible everywhere.
    #[default]
    Production,

    /// Drafts are hidden from listings but reachable by slug for previews.
    Development,
}

/// Lazily loads the content store and caches the resulting [`Catalog`] for
/// the lifetime of the repository.
#[derive(Debug)]
pub struct ContentRepository {
    config: Config,
    content_directory: PathBuf,
    mode: BuildMode,
    catalog: OnceLock<Catalog>,
}

impl ContentRepository {
    /// Creates a repository over `content_directory`. Nothing is read until
    /// the first query (or [`ContentRepository::initialize`]).
    pub fn new(config: Config, content_directory: impl Into<PathBuf>) -> ContentRepository {
        ContentRepository {
            config,
            content_directory: content_directory.into(),
            mode: BuildMode::default(),
            catalog: OnceLock::new(),
        }
    }

    /// Creates a repository over the content directory named by `config`.
    pub fn from_config(config: Config) -> ContentRepository {
        let content_directory = config.content_directory();
        ContentRepository::new(config, content_directory)
    }

    pub fn with_mode(mut self, mode: BuildMode) -> ContentRepository {
        self.mode = mode;
        self.catalog = OnceLock::new();
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Returns the cached catalog, loading it first if this is the first
    /// call. A failed load isn't cached, so the next call tries again.
    pub fn initialize(&self) -> Result<&Catalog> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }
        let catalog = load(&self.config, &self.content_directory, self.mode)?;
        Ok(self.catalog.get_or_init(|| catalog))
    }

    /// Discards the cached catalog and loads the content store again.
    pub fn reload(&mut self) -> Result<&Catalog> {
        self.catalog = OnceLock::new();
        self.initialize()
    }

    /// Every public article, newest first.
    pub fn load_all(&self) -> Result<&[Article]> {
        Ok(self.initialize()?.articles())
    }

    /// Looks up an article by slug. Absence is reported as
    /// [`Error::NotFound`] so callers can render a 404 page.
    pub fn get_by_slug(&self, slug: &str) -> Result<&Article> {
        self.initialize()?
            .get_by_slug(slug)
            .ok_or_else(|| Error::NotFound(slug.to_owned()))
    }

    pub fn get_by_category(&self, category_slug: &str) -> Result<Vec<&Article>> {
        Ok(self.initialize()?.get_by_category(category_slug))
    }

    /// `tag` must already be decoded (see [`crate::route::decode_segment`]).
    pub fn get_by_tag(&self, tag: &str) -> Result<Vec<&Article>> {
        Ok(self.initialize()?.get_by_tag(tag))
    }

    pub fn get_related(&self, article: &Article, count: usize) -> Result<Vec<&Article>> {
        Ok(self.initialize()?.get_related(article, count))
    }

    /// Related articles, as many as the site's `relatedCount`.
    pub fn related(&self, article: &Article) -> Result<Vec<&Article>> {
        self.get_related(article, self.config.related_count())
    }

    /// A page of the full listing using the site's `pageSize`. `None` past
    /// the last page.
    pub fn listing_page(&self, page_number: usize) -> Result<Option<Page<'_, Article>>> {
        let articles = self.load_all()?;
        Ok(page::page(articles, page_number, self.config.page_size()))
    }
}

/// Returns the 1-indexed `page_number`th window of `list`; empty past the
/// last page.
pub fn paginate<T>(list: &[T], page_number: usize, page_size: usize) -> &[T] {
    page::paginate(list, page_number, page_size)
}

/// An article that was left out of the catalog, and why.
#[derive(Debug)]
pub struct Rejected {
    pub path: PathBuf,
    pub slug: String,
    pub error: ArticleError,
}

/// The immutable, loaded article collection.
#[derive(Debug)]
pub struct Catalog {
    /// Public articles, newest first (ties by slug).
    published: Vec<Article>,

    /// Drafts, in the same order. Only reachable by slug in development.
    drafts: Vec<Article>,
    rejected: Vec<Rejected>,
    mode: BuildMode,
}

impl Catalog {
    /// Splits out drafts and sorts. Slugs are unique by the time [`load`]
    /// gets here.
    fn new(articles: Vec<Article>, mode: BuildMode) -> Catalog {
        let (mut drafts, mut published): (Vec<Article>, Vec<Article>) =
            articles.into_iter().partition(|a| a.draft);
        published.sort_by(newest_first);
        drafts.sort_by(newest_first);
        Catalog {
            published,
            drafts,
            rejected: Vec::new(),
            mode,
        }
    }

    /// Every public article, newest first.
    pub fn articles(&self) -> &[Article] {
        &self.published
    }

    /// Drafts, for editor previews.
    pub fn drafts(&self) -> &[Article] {
        &self.drafts
    }

    /// Articles that failed to load.
    pub fn rejected(&self) -> &[Rejected] {
        &self.rejected
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    /// Exact slug lookup. Drafts are only found in
    /// [`BuildMode::Development`].
    pub fn get_by_slug(&self, slug: &str) -> Option<&Article> {
        let draft = || match self.mode {
            BuildMode::Development => self.drafts.iter().find(|a| a.slug == slug),
            BuildMode::Production => None,
        };
        self.published.iter().find(|a| a.slug == slug).or_else(draft)
    }

    /// Public articles in the category `category_slug`, newest first.
    pub fn get_by_category(&self, category_slug: &str) -> Vec<&Article> {
        self.published
            .iter()
            .filter(|a| a.category.as_str() == category_slug)
            .collect()
    }

    /// Public articles tagged exactly (case-sensitively) `tag`, newest first.
    pub fn get_by_tag(&self, tag: &str) -> Vec<&Article> {
        self.published.iter().filter(|a| a.has_tag(tag)).collect()
    }

    /// Up to `count` other public articles ranked by the number of tags they
    /// share with `article`, then by recency. Articles sharing no tags fill
    /// any remaining places, newest first.
    pub fn get_related(&self, article: &Article, count: usize) -> Vec<&Article> {
        let mut candidates: Vec<(usize, &Article)> = self
            .published
            .iter()
            .filter(|a| a.slug != article.slug)
            .map(|a| (article.shared_tags(a), a))
            .collect();
        // `published` is already newest first, and the sort is stable.
        candidates.sort_by(|(x, _), (y, _)| y.cmp(x));
        candidates.into_iter().take(count).map(|(_, a)| a).collect()
    }

    /// Public featured articles, newest first.
    pub fn featured(&self) -> Vec<&Article> {
        self.published.iter().filter(|a| a.featured).collect()
    }

    /// Every tag used by a public article, with its article count.
    pub fn tags(&self) -> BTreeMap<&str, usize> {
        let mut tags = BTreeMap::new();
        for article in &self.published {
            let mut own: Vec<&str> = article.tags.iter().map(String::as_str).collect();
            own.sort_unstable();
            own.dedup();
            for tag in own {
                *tags.entry(tag).or_insert(0) += 1;
            }
        }
        tags
    }

    /// The number of public articles in each category that has any.
    pub fn category_counts(&self) -> BTreeMap<Category, usize> {
        let mut counts = BTreeMap::new();
        for article in &self.published {
            *counts.entry(article.category).or_insert(0) += 1;
        }
        counts
    }
}

fn newest_first(a: &Article, b: &Article) -> std::cmp::Ordering {
    b.publish_date
        .cmp(&a.publish_date)
        .then_with(|| a.slug.cmp(&b.slug))
}

/// Scans `content_directory`, validates each article, and builds the
/// catalog.
fn load(config: &Config, content_directory: &Path, mode: BuildMode) -> Result<Catalog> {
    if !content_directory.is_dir() {
        return Err(Error::ContentDirectory(content_directory.to_owned()));
    }

    let sources = scan(content_directory)?;
    let scanned = sources.len();

    let mut locations: HashMap<String, PathBuf> = HashMap::new();
    let mut articles = Vec::with_capacity(scanned);
    let mut rejected = Vec::new();
    for source in sources {
        if let Some(first) = locations.get(&source.slug) {
            error!(
                slug = %source.slug,
                first = %first.display(),
                second = %source.path.display(),
                "two articles share a slug"
            );
            return Err(Error::DuplicateSlug(source.slug));
        }
        locations.insert(source.slug.clone(), source.path.clone());

        match load_article(&source) {
            Ok(article) => {
                debug!(slug = %article.slug, draft = article.draft, "loaded article");
                articles.push(article);
            }
            Err(err) => {
                warn!(
                    slug = %source.slug,
                    path = %source.path.display(),
                    error = %err,
                    "skipping article"
                );
                rejected.push(Rejected {
                    path: source.path,
                    slug: source.slug,
                    error: err,
                });
            }
        }
    }

    for article in &articles {
        if config.category(article.category.as_str()).is_none() {
            error!(slug = %article.slug, category = %article.category, "undefined category");
            return Err(Error::Config(ConfigError::UndefinedCategory {
                article: article.slug.clone(),
                category: article.category.as_str().to_owned(),
            }));
        }
    }

    let mut catalog = Catalog::new(articles, mode);
    catalog.rejected = rejected;
    info!(
        scanned,
        published = catalog.published.len(),
        drafts = catalog.drafts.len(),
        rejected = catalog.rejected.len(),
        "loaded content"
    );
    Ok(catalog)
}

/// A candidate article found in the content store.
struct Source {
    slug: String,
    path: PathBuf,
}

/// Lists the article sources in `content_directory` in file-name order:
/// directories containing `index.md` and loose `*.md` files. Anything else
/// is skipped.
fn scan(content_directory: &Path) -> Result<Vec<Source>> {
    let mut sources = Vec::new();
    for result in WalkDir::new(content_directory)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = result?;
        let path = entry.path();
        let name = match entry.file_name().to_str() {
            Some(name) => name,
            None => {
                warn!(path = %path.display(), "skipping entry with a non UTF-8 name");
                continue;
            }
        };
        if name.starts_with('.') {
            continue;
        }

        if entry.file_type().is_dir() {
            let index = path.join(BUNDLE_INDEX);
            if index.is_file() {
                sources.push(Source {
                    slug: name.to_owned(),
                    path: index,
                });
            } else {
                debug!(path = %path.display(), "skipping directory without {}", BUNDLE_INDEX);
            }
        } else if path.extension().and_then(|e| e.to_str()) == Some(MARKDOWN_EXTENSION) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                sources.push(Source {
                    slug: stem.to_owned(),
                    path: path.to_owned(),
                });
            }
        }
    }
    Ok(sources)
}

/// Reads, parses, and validates one article.
fn load_article(source: &Source) -> std::result::Result<Article, ArticleError> {
    let contents = util::read(&source.path, "article")?;
    let document = frontmatter::parse(&contents)?;
    Ok(schema::validate(&source.slug, &document.frontmatter, document.body)?)
}

/// Why one article was left out of the catalog. Never fatal to the load.
#[derive(Debug, Error)]
pub enum ArticleError {
    #[error(transparent)]
    Read(#[from] ReadError),

    #[error(transparent)]
    Frontmatter(#[from] frontmatter::Error),

    #[error("invalid frontmatter: {0}")]
    Invalid(#[from] ValidationErrors),
}

/// The result of a repository operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a repository error. All variants but [`Error::NotFound`] are
/// fatal to a load.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned when the content directory is missing.
    #[error("content directory `{}` does not exist", .0.display())]
    ContentDirectory(PathBuf),

    /// Returned for I/O errors while scanning the content directory.
    #[error("scanning content directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Returned when two articles have the same slug.
    #[error("duplicate article slug `{0}`")]
    DuplicateSlug(String),

    /// Returned for structural configuration problems found while loading.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Returned by slug lookups that match nothing.
    #[error("article `{0}` not found")]
    NotFound(String),
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::{CategoryConfig, SiteMetadata, Theme};
    use crate::route::decode_segment;
    use chrono::NaiveDate;
    use std::fs;
    use url::Url;

    fn testdata() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata/site")
    }

    fn fixture_repository() -> ContentRepository {
        let config = Config::from_directory(&testdata()).unwrap();
        ContentRepository::from_config(config)
    }

    fn slugs(articles: &[&Article]) -> Vec<String> {
        articles.iter().map(|a| a.slug.clone()).collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn site_config(root: &Path, categories: &[&str]) -> Config {
        let site = SiteMetadata {
            name: String::from("ServerHi"),
            title: String::from("ServerHi"),
            description: String::from("Tutorials"),
            url: Url::parse("https://serverhi.example/").unwrap(),
            author: String::from("ServerHi Team"),
            page_size: 2,
            related_count: 3,
            content_directory: PathBuf::from("articles"),
        };
        let categories = categories
            .iter()
            .map(|slug| CategoryConfig {
                slug: slug.to_string(),
                name: slug.to_string(),
                description: String::from("d"),
                color: String::from("c"),
                icon: String::from("i"),
            })
            .collect();
        Config::from_parts(root.to_owned(), site, categories, Theme::default()).unwrap()
    }

    fn write_article(dir: &Path, slug: &str, frontmatter: &str) {
        let bundle = dir.join("articles").join(slug);
        fs::create_dir_all(&bundle).unwrap();
        fs::write(
            bundle.join(BUNDLE_INDEX),
            format!("---\n{}---\nBody of {}\n", frontmatter, slug),
        )
        .unwrap();
    }

    fn simple(date: &str, category: &str) -> String {
        format!(
            "title: T\ndescription: D\npubDate: {}\ncategory: {}\ntags: [t]\n",
            date, category
        )
    }

    #[test]
    fn test_load_fixture() -> Result<()> {
        let repository = fixture_repository();
        let catalog = repository.initialize()?;

        assert_eq!(
            slugs(&catalog.articles().iter().collect::<Vec<_>>()),
            vec![
                "docker-compose-basics",
                "github-actions-deploy",
                "nginx-reverse-proxy",
                "ssh-hardening",
            ]
        );
        assert_eq!(catalog.drafts().len(), 1);
        assert_eq!(catalog.drafts()[0].slug, "kubernetes-intro");
        assert_eq!(catalog.rejected().len(), 1);
        assert_eq!(catalog.rejected()[0].slug, "broken-missing-date");
        match &catalog.rejected()[0].error {
            ArticleError::Invalid(errors) => {
                assert_eq!(errors.field("pubDate"), Some(&schema::FieldErrorKind::Missing))
            }
            other => panic!("expected a validation error, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_load_all_is_newest_first() -> Result<()> {
        let repository = fixture_repository();
        let articles = repository.load_all()?;
        for pair in articles.windows(2) {
            assert!(pair[0].publish_date >= pair[1].publish_date);
            if pair[0].publish_date == pair[1].publish_date {
                assert!(pair[0].slug < pair[1].slug);
            }
        }
        assert!(articles.iter().all(|a| !a.draft));
        Ok(())
    }

    #[test]
    fn test_three_dates_scenario() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        write_article(dir.path(), "b", &simple("2026-02-07", "linux"));
        write_article(dir.path(), "a", &simple("2026-02-05", "linux"));
        write_article(dir.path(), "c", &simple("2026-02-08", "linux"));
        let repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));

        let dates: Vec<NaiveDate> = repository.load_all()?.iter().map(|a| a.publish_date).collect();
        assert_eq!(dates, vec![date(2026, 2, 8), date(2026, 2, 7), date(2026, 2, 5)]);
        Ok(())
    }

    #[test]
    fn test_drafts_hidden_from_public_queries() -> Result<()> {
        let repository = fixture_repository();
        let draft_slug = "kubernetes-intro";

        assert!(repository.load_all()?.iter().all(|a| a.slug != draft_slug));
        assert_eq!(slugs(&repository.get_by_category("docker")?), vec!["docker-compose-basics"]);
        assert!(repository.get_by_tag("kubernetes")?.is_empty());
        let host = repository.get_by_slug("docker-compose-basics")?;
        assert!(slugs(&repository.get_related(host, 10)?).iter().all(|s| s != draft_slug));
        assert!(matches!(repository.get_by_slug(draft_slug), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn test_drafts_reachable_by_slug_in_development() -> Result<()> {
        let repository = fixture_repository().with_mode(BuildMode::Development);
        assert!(repository.get_by_slug("kubernetes-intro")?.draft);
        assert!(repository.get_by_category("docker")?.iter().all(|a| !a.draft));
        Ok(())
    }

    #[test]
    fn test_get_by_slug() -> Result<()> {
        let repository = fixture_repository();
        let first = repository.get_by_slug("ssh-hardening")?;
        let second = repository.get_by_slug("ssh-hardening")?;
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.title, "Hardening SSH on Ubuntu");

        match repository.get_by_slug("does-not-exist") {
            Err(Error::NotFound(slug)) => assert_eq!(slug, "does-not-exist"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_initialize_is_memoized() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        write_article(dir.path(), "a", &simple("2026-02-05", "linux"));
        let mut repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));

        let first: *const Catalog = repository.initialize()?;
        write_article(dir.path(), "b", &simple("2026-02-06", "linux"));
        assert_eq!(repository.load_all()?.len(), 1);
        assert!(std::ptr::eq(first, repository.initialize()?));

        assert_eq!(repository.reload()?.articles().len(), 2);
        Ok(())
    }

    #[test]
    fn test_get_by_tag_with_encoded_route_segment() -> Result<()> {
        let repository = fixture_repository();
        let tag = decode_segment("CI%2FCD").unwrap();
        assert_eq!(
            slugs(&repository.get_by_tag(&tag)?),
            vec!["docker-compose-basics", "github-actions-deploy"]
        );
        assert!(repository.get_by_tag("CI%2FCD")?.is_empty());
        assert!(repository.get_by_tag("ci/cd")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_get_related() -> Result<()> {
        let repository = fixture_repository();

        let docker = repository.get_by_slug("docker-compose-basics")?;
        assert_eq!(
            slugs(&repository.get_related(docker, 3)?),
            vec!["github-actions-deploy", "nginx-reverse-proxy", "ssh-hardening"]
        );

        let ssh = repository.get_by_slug("ssh-hardening")?;
        assert_eq!(
            slugs(&repository.get_related(ssh, 2)?),
            vec!["nginx-reverse-proxy", "docker-compose-basics"]
        );

        assert_eq!(repository.related(ssh)?.len(), 3);
        assert!(repository.get_related(ssh, 0)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_get_related_never_includes_article_or_exceeds_count() -> Result<()> {
        let repository = fixture_repository();
        let articles = repository.load_all()?;
        for article in articles {
            for count in 0..6 {
                let related = repository.get_related(article, count)?;
                assert!(related.len() <= count);
                assert_eq!(related.len(), count.min(articles.len() - 1));
                assert!(related.iter().all(|a| a.slug != article.slug));
            }
        }
        Ok(())
    }

    #[test]
    fn test_listing_page() -> Result<()> {
        let repository = fixture_repository();
        let first = repository.listing_page(1)?.unwrap();
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.items.len(), 3);
        assert_eq!(first.next(), Some(2));
        let second = repository.listing_page(2)?.unwrap();
        assert_eq!(second.items[0].slug, "ssh-hardening");
        assert!(repository.listing_page(3)?.is_none());

        let all = repository.load_all()?;
        assert!(paginate(all, 3, 3).is_empty());
        Ok(())
    }

    #[test]
    fn test_catalog_summaries() -> Result<()> {
        let repository = fixture_repository();
        let catalog = repository.initialize()?;
        assert_eq!(slugs(&catalog.featured()), vec!["docker-compose-basics"]);
        let tags = catalog.tags();
        assert_eq!(tags.get("CI/CD"), Some(&2));
        assert_eq!(tags.get("linux"), Some(&2));
        assert_eq!(tags.get("kubernetes"), None);
        let counts = catalog.category_counts();
        assert_eq!(counts.get(&Category::Docker), Some(&1));
        assert_eq!(counts.get(&Category::Troubleshooting), None);
        Ok(())
    }

    #[test]
    fn test_bad_article_does_not_stop_the_load() -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        write_article(dir.path(), "good", &simple("2026-02-05", "linux"));
        write_article(dir.path(), "bad-date", &simple("yesterday", "linux"));
        let no_fence = dir.path().join("articles/no-fence.md");
        fs::write(&no_fence, "title: nope\n").unwrap();
        let repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));

        let catalog = repository.initialize()?;
        assert_eq!(catalog.articles().len(), 1);
        assert_eq!(catalog.rejected().len(), 2);
        let no_fence_rejection = catalog
            .rejected()
            .iter()
            .find(|r| r.slug == "no-fence")
            .unwrap();
        assert_eq!(no_fence_rejection.path, no_fence);
        assert!(matches!(
            no_fence_rejection.error,
            ArticleError::Frontmatter(frontmatter::Error::MissingStartFence)
        ));
        Ok(())
    }

    #[test]
    fn test_undefined_category_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_article(dir.path(), "a", &simple("2026-02-05", "linux"));
        write_article(dir.path(), "b", &simple("2026-02-05", "troubleshooting"));
        let repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));

        match repository.initialize() {
            Err(Error::Config(ConfigError::UndefinedCategory { article, category })) => {
                assert_eq!(article, "b");
                assert_eq!(category, "troubleshooting");
            }
            other => panic!("expected UndefinedCategory, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_slug_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        write_article(dir.path(), "a", &simple("2026-02-05", "linux"));
        fs::write(
            dir.path().join("articles/a.md"),
            format!("---\n{}---\n", simple("2026-02-06", "linux")),
        )
        .unwrap();
        let repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));
        assert!(matches!(repository.initialize(), Err(Error::DuplicateSlug(slug)) if slug == "a"));
    }

    #[test]
    fn test_missing_content_directory() {
        let dir = tempfile::tempdir().unwrap();
        let repository = ContentRepository::from_config(site_config(dir.path(), &["linux"]));
        assert!(matches!(repository.initialize(), Err(Error::ContentDirectory(_))));
    }
}
