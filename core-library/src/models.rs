//! Domain models for the book catalog
//!
//! This module contains the immutable book record plus the view models handed
//! to the presentation layer (preview cards, detail view, dropdown options).

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ID Types
// =============================================================================

/// Identifier of a book record as it appears in the dataset
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(pub String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BookId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// Domain Models
// =============================================================================

/// Book record with complete metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Unique identifier
    pub id: BookId,
    /// Book title
    pub title: String,
    /// Author reference (key into the author table)
    pub author: String,
    /// Genre references, in dataset order
    pub genres: Vec<String>,
    /// Cover image URL
    pub image: String,
    /// Blurb shown in the detail view
    pub description: String,
    /// Publication timestamp
    pub published: DateTime<Utc>,
}

impl BookRecord {
    /// Validate book data
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().trim().is_empty() {
            return Err("Book id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err(format!("Book {} has an empty title", self.id));
        }

        if self.author.trim().is_empty() {
            return Err(format!("Book {} has no author reference", self.id));
        }

        Ok(())
    }

    /// Normalize a string for title matching (lowercase only, whitespace kept)
    pub fn normalize(s: &str) -> String {
        s.to_lowercase()
    }

    /// Whether the record is tagged with the given genre
    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }

    /// Publication year used in the detail subtitle
    pub fn published_year(&self) -> i32 {
        self.published.year()
    }
}

// =============================================================================
// View Models
// =============================================================================

/// Data needed to render a preview card in the list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookPreview {
    /// Identifier carried by the rendered card, used for selection
    pub id: BookId,
    pub title: String,
    pub image: String,
    /// Author display name; empty when the author id is unknown
    pub author_name: String,
}

/// Data needed to populate the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDetail {
    pub id: BookId,
    pub title: String,
    pub image: String,
    pub description: String,
    /// `"<author name> (<published year>)"`
    pub subtitle: String,
}

/// Entry of the author or genre dropdown in the search form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> BookRecord {
        BookRecord {
            id: BookId::new("b-1"),
            title: "The Left Hand of Darkness".to_string(),
            author: "a-1".to_string(),
            genres: vec!["scifi".to_string(), "fiction".to_string()],
            image: "https://covers.example/b-1.jpg".to_string(),
            description: "A diplomat on a winter planet.".to_string(),
            published: Utc.with_ymd_and_hms(1969, 3, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_book_validation() {
        let mut book = record();
        assert!(book.validate().is_ok());

        book.title = "   ".to_string();
        assert!(book.validate().is_err());

        book.title = "Valid".to_string();
        book.id = BookId::new("");
        assert!(book.validate().is_err());

        book.id = BookId::new("b-2");
        book.author = "".to_string();
        assert!(book.validate().is_err());
    }

    #[test]
    fn test_book_normalize_keeps_whitespace() {
        assert_eq!(BookRecord::normalize("  The HOBBIT "), "  the hobbit ");
    }

    #[test]
    fn test_book_has_genre() {
        let book = record();
        assert!(book.has_genre("scifi"));
        assert!(book.has_genre("fiction"));
        assert!(!book.has_genre("sci"));
        assert!(!book.has_genre("horror"));
    }

    #[test]
    fn test_published_year() {
        assert_eq!(record().published_year(), 1969);
    }

    #[test]
    fn test_book_id_display() {
        let id = BookId::from("760b3450-9c38-4a3e");
        assert_eq!(id.to_string(), "760b3450-9c38-4a3e");
        assert_eq!(id.as_str(), "760b3450-9c38-4a3e");
    }

    #[test]
    fn test_book_id_serializes_transparently() {
        let json = serde_json::to_string(&BookId::new("b-9")).unwrap();
        assert_eq!(json, "\"b-9\"");
    }
}
