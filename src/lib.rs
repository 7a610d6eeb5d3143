//! Workspace façade crate.
//!
//! Re-exports the browser façade together with the catalog and runtime crates
//! so host applications can depend on `bookshelf` alone.

pub use core_library as library;
pub use core_runtime as runtime;
pub use core_service::{bootstrap, BookBrowser, CoreError, ListView, Result};
