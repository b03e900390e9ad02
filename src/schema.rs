//! Validates an article's frontmatter against the content schema. Each field
//! has its own validator; [`validate`] runs all of them and reports every
//! failure rather than stopping at the first.
//!
//! | key | type | required |
//! |-----|------|----------|
//! | `title`, `description` | non-empty string | yes |
//! | `pubDate` (alias `publishDate`) | `YYYY-MM-DD` | yes |
//! | `updatedDate` | `YYYY-MM-DD`, not before `pubDate` | no |
//! | `category` | one of [`Category::ALL`] | yes |
//! | `tags` | sequence of non-empty strings | yes |
//! | `author` | string | no (defaults to [`DEFAULT_AUTHOR`]) |
//! | `featured`, `draft` | boolean | no (default `false`) |
//! | `difficulty` | one of [`Difficulty::ALL`] | no |
//! | `estimatedTime`, `coverImage`, `coverImageAlt` | string | no |
//! | `prerequisites`, `osCompatibility` | sequence of strings | no |
//!
//! Unknown keys are ignored.

use crate::article::{Article, Category, Difficulty};
use crate::config::DEFAULT_AUTHOR;
use chrono::NaiveDate;
use serde_yaml::{Mapping, Value};
use std::fmt;
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates the frontmatter and body of the article identified by `slug`.
pub fn validate(
    slug: &str,
    frontmatter: &Mapping,
    body: &str,
) -> Result<Article, ValidationErrors> {
    let mut fields = Fields {
        map: frontmatter,
        errors: Vec::new(),
    };

    let title = fields.check("title", required(text));
    let description = fields.check("description", required(text));
    let publish_date = match fields.get("pubDate") {
        Some(_) => fields.check("pubDate", required(date)),
        None => fields.check_alias("publishDate", "pubDate", required(date)),
    };
    let updated_date = fields.check("updatedDate", optional(date)).flatten();
    let category = fields.check("category", required(category));
    let tags = fields.check("tags", required(string_list));
    let author = fields.check("author", optional(text)).flatten();
    let featured = fields.check("featured", optional(boolean)).flatten();
    let draft = fields.check("draft", optional(boolean)).flatten();
    let difficulty = fields.check("difficulty", optional(difficulty)).flatten();
    let estimated_time = fields.check("estimatedTime", optional(text)).flatten();
    let prerequisites = fields.check("prerequisites", optional(string_list)).flatten();
    let os_compatibility = fields.check("osCompatibility", optional(string_list)).flatten();
    let cover_image = fields.check("coverImage", optional(text)).flatten();
    let cover_image_alt = fields.check("coverImageAlt", optional(text)).flatten();

    if let (Some(published), Some(updated)) = (publish_date, updated_date) {
        if updated < published {
            fields.errors.push(FieldError {
                field: "updatedDate",
                kind: FieldErrorKind::UpdatedBeforePublished { published, updated },
            });
        }
    }

    match (title, description, publish_date, category, tags) {
        (Some(title), Some(description), Some(publish_date), Some(category), Some(tags))
            if fields.errors.is_empty() =>
        {
            Ok(Article {
                slug: slug.to_owned(),
                title,
                description,
                publish_date,
                updated_date,
                category,
                tags,
                author: author.unwrap_or_else(|| DEFAULT_AUTHOR.to_owned()),
                featured: featured.unwrap_or(false),
                draft: draft.unwrap_or(false),
                difficulty,
                estimated_time,
                prerequisites,
                os_compatibility,
                cover_image,
                cover_image_alt,
                body: body.to_owned(),
            })
        }
        _ => Err(ValidationErrors(fields.errors)),
    }
}

/// A field validator: converts a present (non-null) value or explains why it
/// can't.
type Validator<T> = fn(&Value) -> Result<T, FieldErrorKind>;

/// Wraps the frontmatter mapping and accumulates field errors.
struct Fields<'a> {
    map: &'a Mapping,
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    /// Looks up `key`, treating an explicit YAML `null` as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        match self.map.get(&Value::String(key.to_owned())) {
            None | Some(Value::Null) => None,
            Some(value) => Some(value),
        }
    }

    fn check<T>(
        &mut self,
        key: &'static str,
        validator: impl FnOnce(Option<&Value>) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        self.check_alias(key, key, validator)
    }

    /// Like [`Fields::check`] but reads `key` while reporting errors under
    /// `field`.
    fn check_alias<T>(
        &mut self,
        key: &str,
        field: &'static str,
        validator: impl FnOnce(Option<&Value>) -> Result<T, FieldErrorKind>,
    ) -> Option<T> {
        match validator(self.get(key)) {
            Ok(value) => Some(value),
            Err(kind) => {
                self.errors.push(FieldError { field, kind });
                None
            }
        }
    }
}

fn required<T>(
    validator: Validator<T>,
) -> impl FnOnce(Option<&Value>) -> Result<T, FieldErrorKind> {
    move |value: Option<&Value>| match value {
        Some(value) => validator(value),
        None => Err(FieldErrorKind::Missing),
    }
}

fn optional<T>(
    validator: Validator<T>,
) -> impl FnOnce(Option<&Value>) -> Result<Option<T>, FieldErrorKind> {
    move |value: Option<&Value>| value.map(validator).transpose()
}

/// A trimmed, non-empty string.
fn text(value: &Value) -> Result<String, FieldErrorKind> {
    let s = value
        .as_str()
        .ok_or(FieldErrorKind::WrongType("a string"))?
        .trim();
    if s.is_empty() {
        Err(FieldErrorKind::Empty)
    } else {
        Ok(s.to_owned())
    }
}

fn boolean(value: &Value) -> Result<bool, FieldErrorKind> {
    value.as_bool().ok_or(FieldErrorKind::WrongType("a boolean"))
}

/// An ISO 8601 calendar date with no time component. Nothing else is
/// accepted.
fn date(value: &Value) -> Result<NaiveDate, FieldErrorKind> {
    let s = value
        .as_str()
        .ok_or(FieldErrorKind::WrongType("a date string"))?
        .trim();
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(FieldErrorKind::InvalidDate(s.to_owned()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| FieldErrorKind::InvalidDate(s.to_owned()))
}

/// A sequence of trimmed, non-empty strings. Order is preserved.
fn string_list(value: &Value) -> Result<Vec<String>, FieldErrorKind> {
    const EXPECTED: &str = "a sequence of strings";
    value
        .as_sequence()
        .ok_or(FieldErrorKind::WrongType(EXPECTED))?
        .iter()
        .map(|item| match item.as_str() {
            Some(s) if s.trim().is_empty() => Err(FieldErrorKind::Empty),
            Some(s) => Ok(s.trim().to_owned()),
            None => Err(FieldErrorKind::WrongType(EXPECTED)),
        })
        .collect()
}

fn category(value: &Value) -> Result<Category, FieldErrorKind> {
    let s = text(value)?;
    s.parse().map_err(|_| FieldErrorKind::UnknownCategory(s))
}

fn difficulty(value: &Value) -> Result<Difficulty, FieldErrorKind> {
    let s = text(value)?;
    s.parse().map_err(|_| FieldErrorKind::UnknownDifficulty(s))
}

/// A problem with one frontmatter field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{field}`: {kind}")]
pub struct FieldError {
    /// The frontmatter key the problem was found under.
    pub field: &'static str,
    pub kind: FieldErrorKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldErrorKind {
    #[error("missing required field")]
    Missing,

    #[error("expected {0}")]
    WrongType(&'static str),

    #[error("must not be empty")]
    Empty,

    #[error("`{0}` is not a date in YYYY-MM-DD form")]
    InvalidDate(String),

    #[error("`{0}` is not a known category")]
    UnknownCategory(String),

    #[error("`{0}` is not one of beginner, intermediate, advanced")]
    UnknownDifficulty(String),

    #[error("updated date {updated} is earlier than publish date {published}")]
    UpdatedBeforePublished {
        published: NaiveDate,
        updated: NaiveDate,
    },
}

/// Every field problem found in one article's frontmatter. Never empty when
/// returned from [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl ValidationErrors {
    /// Returns the error reported for `field`, if any.
    pub fn field(&self, field: &str) -> Option<&FieldErrorKind> {
        self.0.iter().find(|e| e.field == field).map(|e| &e.kind)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, err) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}
