//! Pagination state for the "show more" list
//!
//! [`PageCursor`] counts how many pages of the current match set have been
//! revealed. [`BrowseState`] pairs the cursor with the match set it walks so
//! that a new search replaces both in one step.

use crate::models::BookRecord;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Number of pages revealed over a match set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageCursor {
    /// Number of items per page; zero would never reveal anything
    pub page_size: NonZeroUsize,
    /// Pages revealed so far (1-indexed, never below 1)
    pub page: usize,
}

impl PageCursor {
    /// Create a cursor positioned on the first page
    ///
    /// # Examples
    ///
    /// ```
    /// use core_library::PageCursor;
    /// use std::num::NonZeroUsize;
    ///
    /// let cursor = PageCursor::new(NonZeroUsize::new(36).unwrap());
    /// assert_eq!(cursor.page, 1);
    /// assert_eq!(cursor.revealed(100), 36);
    /// ```
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self { page_size, page: 1 }
    }

    /// Items revealed so far, clamped to `total`
    pub fn revealed(&self, total: usize) -> usize {
        self.page.saturating_mul(self.page_size.get()).min(total)
    }

    /// Items not yet revealed; never negative
    pub fn remaining(&self, total: usize) -> usize {
        total.saturating_sub(self.page.saturating_mul(self.page_size.get()))
    }

    /// Index range of the page after the revealed ones, clamped to `total`
    pub fn next_range(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.page.saturating_mul(self.page_size.get()).min(total);
        let end = start.saturating_add(self.page_size.get()).min(total);
        start..end
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn advance(&mut self) {
        self.page = self.page.saturating_add(1);
    }
}

/// Summary the list footer needs after every render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListStatus {
    /// Matches not yet revealed
    pub remaining: usize,
    /// Whether the "show more" button is enabled
    pub can_reveal_more: bool,
    /// Whether the "no results" message is shown
    pub is_empty: bool,
}

impl ListStatus {
    /// Text of the "show more" button
    pub fn label(&self) -> String {
        format!("Show more ({})", self.remaining)
    }
}

/// Current match set and how far into it the list has been revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseState {
    matches: Vec<BookRecord>,
    cursor: PageCursor,
}

impl BrowseState {
    pub fn new(matches: Vec<BookRecord>, page_size: NonZeroUsize) -> Self {
        Self {
            matches,
            cursor: PageCursor::new(page_size),
        }
    }

    /// Replace the match set and rewind the cursor to page 1.
    ///
    /// The reset happens even when the new set equals the old one.
    pub fn replace_matches(&mut self, matches: Vec<BookRecord>) {
        self.matches = matches;
        self.cursor.reset();
    }

    pub fn matches(&self) -> &[BookRecord] {
        &self.matches
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Everything revealed so far, from the first match.
    pub fn current_page(&self) -> &[BookRecord] {
        &self.matches[..self.cursor.revealed(self.matches.len())]
    }

    /// Reveal the next page and return just that slice.
    ///
    /// Past the end this yields an empty slice; the page index still moves.
    pub fn advance(&mut self) -> &[BookRecord] {
        let range = self.cursor.next_range(self.matches.len());
        self.cursor.advance();
        &self.matches[range]
    }

    pub fn remaining_count(&self) -> usize {
        self.cursor.remaining(self.matches.len())
    }

    pub fn status(&self) -> ListStatus {
        let remaining = self.remaining_count();
        ListStatus {
            remaining,
            can_reveal_more: remaining > 0,
            is_empty: self.matches.is_empty(),
        }
    }
}
