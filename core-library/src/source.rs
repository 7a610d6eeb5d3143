//! Catalog sources
//!
//! The dataset is supplied by the host. [`CatalogSource`] is the seam the
//! service façade loads through; [`JsonCatalogSource`] reads the JSON document
//! form from memory or from disk.

use crate::catalog::Catalog;
use crate::error::Result;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Anything able to produce the immutable catalog once at startup.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Catalog>;
}

/// JSON dataset held inline or read from a file
#[derive(Debug, Clone)]
pub enum JsonCatalogSource {
    Inline(String),
    File(PathBuf),
}

impl JsonCatalogSource {
    pub fn inline(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }
}

impl CatalogSource for JsonCatalogSource {
    #[instrument(skip(self))]
    fn load(&self) -> Result<Catalog> {
        match self {
            Self::Inline(json) => Catalog::from_json(json),
            Self::File(path) => {
                debug!(path = %path.display(), "reading catalog file");
                let json = std::fs::read_to_string(path)?;
                Catalog::from_json(&json)
            }
        }
    }
}
