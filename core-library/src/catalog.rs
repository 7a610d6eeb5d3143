//! # Catalog
//!
//! The immutable source list of book records plus the author and genre
//! display-name tables. A catalog is loaded once and never mutated; every
//! other component borrows from it.

use crate::error::{LibraryError, Result};
use crate::models::{BookDetail, BookPreview, BookRecord, SelectOption};
use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::debug;

/// Id → display name table, iterated in load order
pub type DisplayNames = IndexMap<String, String>;

/// Label of the "any" entry in the genre dropdown
pub const ALL_GENRES_LABEL: &str = "All Genres";
/// Label of the "any" entry in the author dropdown
pub const ALL_AUTHORS_LABEL: &str = "All Authors";

/// Serialized dataset layout
#[derive(Debug, Deserialize)]
struct CatalogDocument {
    books: Vec<BookRecord>,
    #[serde(default)]
    authors: DisplayNames,
    #[serde(default)]
    genres: DisplayNames,
}

/// Immutable set of book records with author and genre lookup tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    books: Vec<BookRecord>,
    authors: DisplayNames,
    genres: DisplayNames,
}

impl Catalog {
    /// Build a catalog, rejecting invalid records and duplicate ids.
    pub fn new(books: Vec<BookRecord>, authors: DisplayNames, genres: DisplayNames) -> Result<Self> {
        let mut seen = HashSet::with_capacity(books.len());
        for book in &books {
            book.validate().map_err(|message| LibraryError::InvalidInput {
                field: "book".to_string(),
                message,
            })?;
            if !seen.insert(book.id.as_str()) {
                return Err(LibraryError::DuplicateId(book.id.to_string()));
            }
        }

        debug!(
            books = books.len(),
            authors = authors.len(),
            genres = genres.len(),
            "catalog loaded"
        );

        Ok(Self {
            books,
            authors,
            genres,
        })
    }

    /// Parse a catalog from its JSON document form.
    ///
    /// ```
    /// use core_library::Catalog;
    ///
    /// let catalog = Catalog::from_json(r#"{
    ///     "books": [{
    ///         "id": "b1", "title": "Dune", "author": "a1", "genres": ["g1"],
    ///         "image": "", "description": "", "published": "1965-08-01T00:00:00Z"
    ///     }],
    ///     "authors": {"a1": "Frank Herbert"},
    ///     "genres": {"g1": "Science Fiction"}
    /// }"#).unwrap();
    ///
    /// assert_eq!(catalog.len(), 1);
    /// assert_eq!(catalog.author_name("a1"), Some("Frank Herbert"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.books, document.authors, document.genres)
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    pub fn authors(&self) -> &DisplayNames {
        &self.authors
    }

    pub fn genres(&self) -> &DisplayNames {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn author_name(&self, id: &str) -> Option<&str> {
        self.authors.get(id).map(String::as_str)
    }

    pub fn genre_name(&self, id: &str) -> Option<&str> {
        self.genres.get(id).map(String::as_str)
    }

    /// Look a record up by id over the whole catalog.
    pub fn find_by_id(&self, id: &str) -> Option<&BookRecord> {
        find_by_id(&self.books, id)
    }

    /// Preview card data for a record.
    pub fn preview(&self, book: &BookRecord) -> BookPreview {
        BookPreview {
            id: book.id.clone(),
            title: book.title.clone(),
            image: book.image.clone(),
            author_name: self.author_name(&book.author).unwrap_or_default().to_string(),
        }
    }

    /// Detail overlay data for a record.
    pub fn detail(&self, book: &BookRecord) -> BookDetail {
        let author = self.author_name(&book.author).unwrap_or_default();
        BookDetail {
            id: book.id.clone(),
            title: book.title.clone(),
            image: book.image.clone(),
            description: book.description.clone(),
            subtitle: format!("{} ({})", author, book.published_year()),
        }
    }

    /// Genre dropdown entries, the "any" entry first.
    pub fn genre_options(&self, any: &str) -> Vec<SelectOption> {
        options(any, ALL_GENRES_LABEL, &self.genres)
    }

    /// Author dropdown entries, the "any" entry first.
    pub fn author_options(&self, any: &str) -> Vec<SelectOption> {
        options(any, ALL_AUTHORS_LABEL, &self.authors)
    }
}

/// First record whose id equals `id`, or `None`.
pub fn find_by_id<'a>(books: &'a [BookRecord], id: &str) -> Option<&'a BookRecord> {
    books.iter().find(|book| book.id.as_str() == id)
}

fn options(any: &str, any_label: &str, names: &DisplayNames) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new(any, any_label))
        .chain(names.iter().map(|(id, name)| SelectOption::new(id, name)))
        .collect()
}
