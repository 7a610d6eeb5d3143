//! Filter engine for the book catalog.
//!
//! A [`BookQuery`] combines a title substring, an author id and a genre id.
//! [`filter`] is a single linear pass over the catalog that keeps every record
//! passing all three criteria, in catalog order. Absent criteria are expressed
//! with the [`ANY`] sentinel (author, genre) or an empty title, never omitted.

use crate::models::BookRecord;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "do not filter on this field"
pub const ANY: &str = "any";

/// Filter criteria submitted from the search form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookQuery {
    /// Title substring, matched case-insensitively; blank matches everything
    pub title: String,
    /// Author id or [`ANY`]
    pub author: String,
    /// Genre id or [`ANY`]
    pub genre: String,
}

impl Default for BookQuery {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: ANY.to_string(),
            genre: ANY.to_string(),
        }
    }
}

impl BookQuery {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    /// True when no criterion restricts the catalog.
    pub fn is_unrestricted(&self) -> bool {
        self.title.trim().is_empty() && self.author == ANY && self.genre == ANY
    }

    /// Whether a single record passes all three criteria.
    pub fn matches(&self, book: &BookRecord) -> bool {
        self.matches_title(book) && self.matches_author(book) && self.matches_genre(book)
    }

    fn matches_title(&self, book: &BookRecord) -> bool {
        self.title.trim().is_empty()
            || BookRecord::normalize(&book.title).contains(&BookRecord::normalize(&self.title))
    }

    fn matches_author(&self, book: &BookRecord) -> bool {
        self.author == ANY || book.author == self.author
    }

    fn matches_genre(&self, book: &BookRecord) -> bool {
        self.genre == ANY || book.has_genre(&self.genre)
    }
}

/// Raw search form values before normalization.
///
/// Unset or blank author/genre fields become [`ANY`]; an unset title becomes
/// the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryForm {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
}

impl QueryForm {
    pub fn into_query(self) -> BookQuery {
        BookQuery {
            title: self.title.unwrap_or_default(),
            author: or_any(self.author),
            genre: or_any(self.genre),
        }
    }
}

impl From<QueryForm> for BookQuery {
    fn from(form: QueryForm) -> Self {
        form.into_query()
    }
}

fn or_any(value: Option<String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => ANY.to_string(),
    }
}

/// Records of `books` passing `query`, in their original order.
pub fn filter(books: &[BookRecord], query: &BookQuery) -> Vec<BookRecord> {
    books
        .iter()
        .filter(|book| query.matches(book))
        .cloned()
        .collect()
}
