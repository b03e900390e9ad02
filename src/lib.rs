//! The content layer of the ServerHi tutorial site. The architecture can be
//! broken down into three steps:
//!
//! 1. Loading the site configuration ([`crate::config`])
//! 2. Loading articles from the content store ([`crate::repository`])
//! 3. Querying the loaded articles ([`crate::repository::Catalog`])
//!
//! Of these, the second step is the most involved. Each article source is
//! first split into YAML frontmatter and a Markdown body
//! ([`crate::frontmatter`]), then the frontmatter is checked field by field
//! against the content schema ([`crate::schema`]) to produce a typed
//! [`crate::article::Article`]. Articles that fail either step are logged and
//! left out without stopping the load; configuration problems stop it.
//!
//! The loaded collection is immutable and cached for the lifetime of the
//! [`crate::repository::ContentRepository`]. Listings are paginated with
//! [`crate::page`], and [`crate::route`] builds the URLs that page templates
//! link to.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod article;
pub mod config;
pub mod frontmatter;
pub mod markdown;
pub mod page;
pub mod repository;
pub mod route;
pub mod schema;
pub mod util;
