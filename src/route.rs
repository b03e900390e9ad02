//! The site's URL scheme. Page templates own routing; this module only gives
//! them one consistent way to build article, category, tag, and listing URLs.
//!
//! Tags may contain characters that aren't safe in a path segment (`CI/CD`,
//! `Docker Compose`), so tag routes carry the percent-encoded tag and the tag
//! must be decoded with [`decode_segment`] before it's handed to
//! [`crate::repository::Catalog::get_by_tag`].

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use thiserror::Error;
use url::Url;

/// Everything except the RFC 3986 unreserved characters.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes `segment` for use as a single URL path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Reverses [`encode_segment`] (and any other percent-encoding of UTF-8).
pub fn decode_segment(segment: &str) -> Result<String> {
    percent_decode_str(segment)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| Error::InvalidSegment(segment.to_owned()))
}

/// Builds URLs relative to the site's base URL.
#[derive(Debug, Clone)]
pub struct Routes {
    base: Url,
}

impl Routes {
    /// `base` should end in `/`; one is appended if it doesn't.
    pub fn new(base: &Url) -> Routes {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Routes { base }
    }

    /// `{base}articles/{slug}/`
    pub fn article(&self, slug: &str) -> Result<Url> {
        self.join(&format!("articles/{}/", encode_segment(slug)))
    }

    /// `{base}categories/{slug}/`
    pub fn category(&self, slug: &str) -> Result<Url> {
        self.join(&format!("categories/{}/", encode_segment(slug)))
    }

    /// `{base}tags/{percent-encoded tag}/`
    pub fn tag(&self, tag: &str) -> Result<Url> {
        self.join(&format!("tags/{}/", encode_segment(tag)))
    }

    /// The full listing: `{base}` for page 1, `{base}page/{n}/` after that.
    pub fn listing(&self, page_number: usize) -> Result<Url> {
        match page_number {
            0 | 1 => Ok(self.base.clone()),
            n => self.join(&format!("page/{}/", n)),
        }
    }

    // NOTE: the relative paths all end in `/`. Without the trailing slash
    // `Url::join` would treat the last segment as a file name.
    fn join(&self, relative: &str) -> Result<Url> {
        Ok(self.base.join(relative)?)
    }
}

/// The result of a routing operation.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Returned when a route segment doesn't decode to UTF-8.
    #[error("route segment `{0}` is not valid percent-encoded UTF-8")]
    InvalidSegment(String),

    /// Returned when a route can't be joined onto the base URL.
    #[error(transparent)]
    UrlParse(#[from] url::ParseError),
}
