//! Splits an article source file into its YAML frontmatter and its Markdown
//! body. This is only the *parse* step: the resulting [`Mapping`] is untyped
//! and is checked field by field in [`crate::schema`].
//!
//! A source file is structured as follows:
//!
//! ```md
//! ---
//! title: Hello, world!
//! pubDate: 2026-02-05
//! tags: [greet]
//! ---
//! # Hello
//!
//! World
//! ```

use serde_yaml::{Mapping, Value};
use thiserror::Error;

const FENCE: &str = "---";

/// A parsed-but-unvalidated article source.
#[derive(Debug, Clone, PartialEq)]
pub struct Document<'a> {
    pub frontmatter: Mapping,
    pub body: &'a str,
}

/// Parses `input` into its frontmatter mapping and body.
pub fn parse(input: &str) -> Result<Document<'_>> {
    let input = input.trim_start_matches('\u{feff}');
    let (yaml, body) = split(input)?;
    let frontmatter = if yaml.trim().is_empty() {
        Mapping::new()
    } else {
        match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(mapping) => mapping,
            Value::Null => Mapping::new(),
            _ => return Err(Error::NotAMapping),
        }
    };
    Ok(Document { frontmatter, body })
}

/// Returns the text between the fences and the text after the closing fence
/// line. Fences must occupy a whole line.
fn split(input: &str) -> Result<(&str, &str)> {
    let mut lines = LineOffsets::new(input);
    match lines.next() {
        Some((_, line)) if is_fence(line) => {}
        _ => return Err(Error::MissingStartFence),
    }
    let yaml_start = lines.offset;
    while let Some((line_start, line)) = lines.next() {
        if is_fence(line) {
            return Ok((&input[yaml_start..line_start], &input[lines.offset..]));
        }
    }
    Err(Error::MissingEndFence)
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == FENCE
}

/// Iterates over lines (without terminators) along with their byte offsets.
/// After each call to `next`, `offset` is the start of the following line.
struct LineOffsets<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> LineOffsets<'a> {
    fn new(input: &'a str) -> Self {
        LineOffsets { input, offset: 0 }
    }
}

impl<'a> Iterator for LineOffsets<'a> {
    type Item = (usize, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        if self.offset >= self.input.len() {
            return None;
        }
        let start = self.offset;
        let rest = &self.input[start..];
        let (line, consumed) = match rest.find('\n') {
            Some(i) => (&rest[..i], i + 1),
            None => (rest, rest.len()),
        };
        self.offset += consumed;
        Some((start, line))
    }
}

/// The result of a frontmatter parse.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents an error splitting or parsing frontmatter.
#[derive(Debug, Error)]
pub enum Error {
    /// Returned when a source file doesn't begin with a `---` line.
    #[error("article must begin with `---`")]
    MissingStartFence,

    /// Returned when the opening fence was found but no closing `---` line.
    #[error("missing closing `---`")]
    MissingEndFence,

    /// Returned when the frontmatter isn't valid YAML.
    #[error("malformed frontmatter: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Returned when the frontmatter is YAML but not a key/value mapping.
    #[error("frontmatter must be a mapping of keys to values")]
    NotAMapping,
}
