//! Defines the [`Article`] record along with its closed [`Category`] and
//! [`Difficulty`] enums. Articles are produced by [`crate::schema::validate`]
//! and never mutated afterwards.

use crate::markdown::{self, Heading};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One tutorial or post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// The article's unique identifier, derived from its location in the
    /// content store (bundle directory name or file stem).
    pub slug: String,
    pub title: String,
    pub description: String,
    pub publish_date: NaiveDate,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<NaiveDate>,
    pub category: Category,

    /// Tags in display order. Matching against them is case-sensitive.
    pub tags: Vec<String>,
    pub author: String,
    pub featured: bool,
    pub draft: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_time: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub os_compatibility: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_alt: Option<String>,

    /// The raw markdown body.
    #[serde(skip)]
    pub body: String,
}

impl Article {
    /// Returns true if `tag` is exactly (case included) one of the article's
    /// tags.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Counts the distinct tags this article has in common with `other`.
    pub fn shared_tags(&self, other: &Article) -> usize {
        let theirs: HashSet<&str> = other.tags.iter().map(String::as_str).collect();
        self.tags
            .iter()
            .map(String::as_str)
            .collect::<HashSet<&str>>()
            .intersection(&theirs)
            .count()
    }

    /// The most recent date the article changed.
    pub fn last_modified(&self) -> NaiveDate {
        self.updated_date.unwrap_or(self.publish_date)
    }

    /// Renders the body to HTML.
    pub fn html(&self) -> String {
        markdown::to_html(&self.body)
    }

    /// The body's heading outline.
    pub fn headings(&self) -> Vec<Heading> {
        markdown::headings(&self.body)
    }

    /// Estimated reading time in minutes.
    pub fn reading_time(&self) -> u32 {
        markdown::reading_time(&self.body)
    }
}

/// The closed set of article categories. Which of these a site actually
/// shows is decided by its `categories.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Docker,
    Linux,
    ServerConfig,
    Devops,
    Security,
    Troubleshooting,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Docker,
        Category::Linux,
        Category::ServerConfig,
        Category::Devops,
        Category::Security,
        Category::Troubleshooting,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Docker => "docker",
            Category::Linux => "linux",
            Category::ServerConfig => "server-config",
            Category::Devops => "devops",
            Category::Security => "security",
            Category::Troubleshooting => "troubleshooting",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl FromStr for Difficulty {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| UnknownVariant(s.to_owned()))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no variant of a closed enum.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown value `{0}`")]
pub struct UnknownVariant(pub String);

#[cfg(test)]
mod test {
    use super::*;

    fn article(slug: &str, tags: &[&str]) -> Article {
        Article {
            slug: slug.to_owned(),
            title: slug.to_owned(),
            description: String::from("description"),
            publish_date: NaiveDate::from_ymd_opt(2026, 2, 5).unwrap(),
            updated_date: None,
            category: Category::Linux,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            author: String::from("ServerHi Team"),
            featured: false,
            draft: false,
            difficulty: None,
            estimated_time: None,
            prerequisites: None,
            os_compatibility: None,
            cover_image: None,
            cover_image_alt: None,
            body: String::new(),
        }
    }

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL.iter() {
            assert_eq!(category.as_str().parse::<Category>(), Ok(*category));
        }
        assert_eq!(
            "Docker".parse::<Category>(),
            Err(UnknownVariant(String::from("Docker")))
        );
    }

    #[test]
    fn test_serialized_names_match_as_str() {
        assert_eq!(
            serde_json::to_string(&Category::ServerConfig).unwrap(),
            "\"server-config\""
        );
        assert_eq!(
            serde_json::to_string(&Difficulty::Intermediate).unwrap(),
            "\"intermediate\""
        );
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let a = article("a", &["CI/CD", "docker"]);
        assert!(a.has_tag("CI/CD"));
        assert!(!a.has_tag("ci/cd"));
        assert!(!a.has_tag("CI%2FCD"));
    }

    #[test]
    fn test_shared_tags_counts_distinct() {
        let a = article("a", &["linux", "ssh", "linux"]);
        let b = article("b", &["linux", "ssh", "security"]);
        let c = article("c", &["docker"]);
        assert_eq!(a.shared_tags(&b), 2);
        assert_eq!(b.shared_tags(&a), 2);
        assert_eq!(a.shared_tags(&c), 0);
    }

    #[test]
    fn test_last_modified() {
        let mut a = article("a", &[]);
        assert_eq!(a.last_modified(), a.publish_date);
        let updated = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        a.updated_date = Some(updated);
        assert_eq!(a.last_modified(), updated);
    }
}
