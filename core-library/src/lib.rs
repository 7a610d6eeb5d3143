//! # Book Library Module
//!
//! Owns the immutable book catalog and the browsing logic over it.
//!
//! ## Overview
//!
//! This module provides:
//! - The catalog of book records with author and genre display names
//! - The filter engine (title substring, author, genre)
//! - The pagination cursor behind the "show more" list
//! - Selection lookup by book id

pub mod catalog;
pub mod error;
pub mod models;
pub mod pagination;
pub mod query;
pub mod source;

pub use catalog::{find_by_id, Catalog, DisplayNames};
pub use error::{LibraryError, Result};
pub use models::{BookDetail, BookId, BookPreview, BookRecord, SelectOption};
pub use pagination::{BrowseState, ListStatus, PageCursor};
pub use query::{filter, BookQuery, QueryForm, ANY};
pub use source::{CatalogSource, JsonCatalogSource};
