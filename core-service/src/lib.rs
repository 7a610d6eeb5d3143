//! Book browser façade and bootstrap helpers.
//!
//! This crate wires the configuration from `core-runtime` and the catalog
//! logic from `core-library` into the single object a presentation layer
//! drives: [`BookBrowser`]. Every method runs synchronously to completion
//! within one user action (submit a search, show more, select a card).

pub mod error;

pub use error::{CoreError, Result};

use std::num::NonZeroUsize;
use std::sync::Arc;

use core_library::{
    filter, BookDetail, BookPreview, BookQuery, BookRecord, BrowseState, Catalog, CatalogSource,
    ListStatus, SelectOption, ANY,
};
use core_runtime::{logging::init_logging, BrowserConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Preview cards to append to the list plus the footer state after appending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListView {
    pub items: Vec<BookPreview>,
    pub status: ListStatus,
}

/// Primary façade exposed to host applications.
///
/// Holds the shared catalog and the one piece of mutable browsing state: the
/// current match set with its page cursor.
#[derive(Debug, Clone)]
pub struct BookBrowser {
    config: BrowserConfig,
    catalog: Arc<Catalog>,
    state: BrowseState,
}

impl BookBrowser {
    /// Create a browser showing the whole catalog on page 1.
    ///
    /// Fails when `config` does not pass [`BrowserConfig::validate`].
    pub fn new(config: BrowserConfig, catalog: Arc<Catalog>) -> Result<Self> {
        config.validate()?;
        let page_size = NonZeroUsize::new(config.page_size).ok_or_else(|| {
            CoreError::InitializationFailed("Page size must be greater than 0".to_string())
        })?;

        let state = BrowseState::new(catalog.books().to_vec(), page_size);
        Ok(Self {
            config,
            catalog,
            state,
        })
    }

    /// Load the catalog from a source, then create the browser.
    pub fn from_source(config: BrowserConfig, source: &dyn CatalogSource) -> Result<Self> {
        let catalog = source.load()?;
        Self::new(config, Arc::new(catalog))
    }

    pub fn config(&self) -> &BrowserConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Current match set.
    pub fn matches(&self) -> &[BookRecord] {
        self.state.matches()
    }

    /// Run a search and restart the list at page 1.
    ///
    /// Accepts a [`BookQuery`] or raw [`core_library::QueryForm`] values.
    #[instrument(skip(self, query))]
    pub fn submit(&mut self, query: impl Into<BookQuery>) -> ListView {
        let query = query.into();
        let matches = if query.is_unrestricted() {
            self.catalog.books().to_vec()
        } else {
            filter(self.catalog.books(), &query)
        };
        debug!(
            title = %query.title,
            author = %query.author,
            genre = %query.genre,
            matches = matches.len(),
            "search submitted"
        );
        self.state.replace_matches(matches);

        ListView {
            items: self.previews(self.state.current_page()),
            status: self.state.status(),
        }
    }

    /// Everything revealed so far, as preview cards.
    pub fn current_page(&self) -> Vec<BookPreview> {
        self.previews(self.state.current_page())
    }

    /// Reveal the next page; yields no items once everything is shown.
    #[instrument(skip(self))]
    pub fn reveal_more(&mut self) -> ListView {
        let page = self.state.advance().to_vec();
        let status = self.state.status();
        debug!(
            page = self.state.cursor().page,
            revealed = page.len(),
            remaining = status.remaining,
            "revealed more results"
        );

        ListView {
            items: self.previews(&page),
            status,
        }
    }

    pub fn remaining_count(&self) -> usize {
        self.state.remaining_count()
    }

    pub fn status(&self) -> ListStatus {
        self.state.status()
    }

    /// Detail view for the card carrying `id`, looked up over the whole
    /// catalog. `None` means there is nothing to open.
    #[instrument(skip(self))]
    pub fn select(&self, id: &str) -> Option<BookDetail> {
        match self.catalog.find_by_id(id) {
            Some(book) => Some(self.catalog.detail(book)),
            None => {
                debug!(id, "selected book not in catalog");
                None
            }
        }
    }

    pub fn genre_options(&self) -> Vec<SelectOption> {
        self.catalog.genre_options(ANY)
    }

    pub fn author_options(&self) -> Vec<SelectOption> {
        self.catalog.author_options(ANY)
    }

    pub fn previews(&self, books: &[BookRecord]) -> Vec<BookPreview> {
        books.iter().map(|book| self.catalog.preview(book)).collect()
    }
}

/// Install logging (when configured), load the catalog and build the browser.
pub fn bootstrap(config: BrowserConfig, source: &dyn CatalogSource) -> Result<BookBrowser> {
    if let Some(logging) = config.logging.clone() {
        init_logging(logging).map_err(|err| CoreError::InitializationFailed(err.to_string()))?;
    }

    let browser = BookBrowser::from_source(config, source)?;
    info!(
        books = browser.catalog().len(),
        page_size = browser.config().page_size,
        "book browser ready"
    );
    Ok(browser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_library::{DisplayNames, JsonCatalogSource, LibraryError, QueryForm};
    use mockall::mock;

    mock! {
        pub Source {}

        impl CatalogSource for Source {
            fn load(&self) -> core_library::Result<Catalog>;
        }
    }

    const FIVE_BOOKS: &str = r#"{
        "books": [
            {"id": "1", "title": "One", "author": "a1", "genres": ["g1"], "image": "i1",
             "description": "d1", "published": "2001-01-01T00:00:00Z"},
            {"id": "2", "title": "Two", "author": "a2", "genres": ["g2"], "image": "i2",
             "description": "d2", "published": "2002-01-01T00:00:00Z"},
            {"id": "3", "title": "Three", "author": "a1", "genres": ["g1", "g2"], "image": "i3",
             "description": "d3", "published": "2003-01-01T00:00:00Z"},
            {"id": "4", "title": "Four", "author": "a2", "genres": [], "image": "i4",
             "description": "d4", "published": "2004-01-01T00:00:00Z"},
            {"id": "5", "title": "Five", "author": "a1", "genres": ["g1"], "image": "i5",
             "description": "d5", "published": "2005-01-01T00:00:00Z"}
        ],
        "authors": {"a1": "Alice", "a2": "Bram"},
        "genres": {"g1": "Fantasy", "g2": "History"}
    }"#;

    fn browser(page_size: usize) -> BookBrowser {
        let config = BrowserConfig::builder().page_size(page_size).build().unwrap();
        BookBrowser::from_source(config, &JsonCatalogSource::inline(FIVE_BOOKS)).unwrap()
    }

    fn ids(items: &[BookPreview]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_initial_page_shows_whole_catalog() {
        let browser = browser(2);
        assert_eq!(ids(&browser.current_page()), vec!["1", "2"]);
        assert_eq!(browser.remaining_count(), 3);
        assert_eq!(browser.status().label(), "Show more (3)");
    }

    #[test]
    fn test_reveal_more_walks_pages() {
        let mut browser = browser(2);

        let view = browser.reveal_more();
        assert_eq!(ids(&view.items), vec!["3", "4"]);
        assert_eq!(view.status.remaining, 1);

        let view = browser.reveal_more();
        assert_eq!(ids(&view.items), vec!["5"]);
        assert!(!view.status.can_reveal_more);

        let view = browser.reveal_more();
        assert!(view.items.is_empty());
        assert_eq!(browser.current_page().len(), 5);
    }

    #[test]
    fn test_submit_resets_pagination() {
        let mut browser = browser(2);
        browser.reveal_more();

        let view = browser.submit(BookQuery::default());
        assert_eq!(ids(&view.items), vec!["1", "2"]);
        assert_eq!(view.status.remaining, 3);
    }

    #[test]
    fn test_submit_form_values() {
        let mut browser = browser(2);
        let view = browser.submit(QueryForm {
            title: Some("T".to_string()),
            author: Some("".to_string()),
            genre: Some("g2".to_string()),
        });
        assert_eq!(ids(&view.items), vec!["2", "3"]);
        assert_eq!(view.items[0].author_name, "Bram");
        assert!(!view.status.is_empty);
    }

    #[test]
    fn test_submit_without_matches_signals_empty() {
        let mut browser = browser(2);
        let view = browser.submit(BookQuery::default().with_author("ghost-id"));
        assert!(view.items.is_empty());
        assert!(view.status.is_empty);
        assert!(!view.status.can_reveal_more);
    }

    #[test]
    fn test_select_searches_whole_catalog() {
        let mut browser = browser(2);
        browser.submit(BookQuery::default().with_genre("g2"));

        let detail = browser.select("4").expect("book 4 exists");
        assert_eq!(detail.title, "Four");
        assert_eq!(detail.subtitle, "Bram (2004)");
        assert!(browser.select("nonexistent").is_none());
    }

    #[test]
    fn test_dropdown_options() {
        let browser = browser(2);
        let genres = browser.genre_options();
        assert_eq!(genres[0], SelectOption::new(ANY, "All Genres"));
        assert_eq!(genres.len(), 3);

        let authors = browser.author_options();
        assert_eq!(authors[1], SelectOption::new("a1", "Alice"));
    }

    #[test]
    fn test_new_rejects_zero_page_size() {
        let catalog = Catalog::from_json(FIVE_BOOKS).unwrap();
        let config = BrowserConfig {
            page_size: 0,
            logging: None,
        };

        let result = BookBrowser::new(config, Arc::new(catalog));
        assert!(matches!(
            result,
            Err(CoreError::Runtime(core_runtime::Error::Config(_)))
        ));
    }

    #[test]
    fn test_page_size_one_reveals_everything() {
        let mut browser = browser(1);
        let mut shown = browser.current_page().len();
        let mut steps = 0;
        while browser.status().can_reveal_more {
            shown += browser.reveal_more().items.len();
            steps += 1;
        }
        assert_eq!(shown, 5);
        assert_eq!(steps, 4);
    }

    #[test]
    fn test_unrestricted_submit_keeps_catalog_order() {
        let mut browser = browser(10);
        let view = browser.submit(QueryForm {
            title: Some("   ".to_string()),
            ..QueryForm::default()
        });
        assert_eq!(ids(&view.items), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(browser.matches(), browser.catalog().books());
    }

    #[test]
    fn test_from_source_propagates_load_error() {
        let mut source = MockSource::new();
        source
            .expect_load()
            .times(1)
            .returning(|| Err(LibraryError::DuplicateId("1".to_string())));

        let result = BookBrowser::from_source(BrowserConfig::default(), &source);
        assert!(matches!(
            result,
            Err(CoreError::Library(LibraryError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_bootstrap_without_logging() {
        let mut source = MockSource::new();
        source.expect_load().times(1).returning(|| {
            Catalog::new(Vec::new(), DisplayNames::new(), DisplayNames::new())
        });

        let browser = bootstrap(BrowserConfig::default(), &source).unwrap();
        assert!(browser.matches().is_empty());
        assert!(browser.status().is_empty);
    }
}
