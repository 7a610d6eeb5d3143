//! # Browser Configuration Module
//!
//! Provides configuration management for the book browser core.
//!
//! ## Overview
//!
//! The configuration system uses a builder pattern to construct a
//! `BrowserConfig`. Values are validated when the config is built, so a
//! `BrowserConfig` in hand is always usable. The page size is shared with the
//! presentation layer, which sizes its "show more" increments with it.
//!
//! ## Usage
//!
//! ```
//! use core_runtime::config::BrowserConfig;
//!
//! let config = BrowserConfig::builder()
//!     .page_size(24)
//!     .build()
//!     .expect("Failed to build config");
//!
//! assert_eq!(config.page_size, 24);
//! ```
//!
//! ## Error Handling
//!
//! ```should_panic
//! use core_runtime::config::BrowserConfig;
//!
//! // A zero page size can never reveal anything
//! let config = BrowserConfig::builder()
//!     .page_size(0)
//!     .build()
//!     .expect("Should fail - page size must be positive");
//! ```

use crate::error::{Error, Result};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Books revealed per "show more" step unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 36;

/// Upper bound accepted for the page size
pub const MAX_PAGE_SIZE: usize = 10_000;

/// Configuration for the book browser core.
///
/// Use [`BrowserConfigBuilder`] to construct instances, or
/// [`BrowserConfig::from_json`] when reading host settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Number of books per page of the list
    pub page_size: usize,

    /// Logging setup applied by the façade; `None` leaves logging to the host
    pub logging: Option<LoggingConfig>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            logging: None,
        }
    }
}

impl BrowserConfig {
    /// Creates a new builder for constructing a `BrowserConfig`.
    pub fn builder() -> BrowserConfigBuilder {
        BrowserConfigBuilder::default()
    }

    /// Parse and validate a configuration from JSON settings.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| Error::Config(format!("Invalid browser settings: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration and returns an error if invalid.
    ///
    /// This checks the page size is positive and below [`MAX_PAGE_SIZE`].
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(Error::Config(
                "Page size must be greater than 0".to_string(),
            ));
        }

        if self.page_size > MAX_PAGE_SIZE {
            return Err(Error::Config(format!(
                "Page size {} exceeds maximum of {}",
                self.page_size, MAX_PAGE_SIZE
            )));
        }

        Ok(())
    }
}

/// Builder for constructing [`BrowserConfig`] instances.
#[derive(Debug, Default)]
pub struct BrowserConfigBuilder {
    page_size: Option<usize>,
    logging: Option<LoggingConfig>,
}

impl BrowserConfigBuilder {
    /// Sets the number of books per page.
    ///
    /// Default: [`DEFAULT_PAGE_SIZE`]
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Sets the logging configuration installed by the façade.
    pub fn logging(mut self, logging: LoggingConfig) -> Self {
        self.logging = Some(logging);
        self
    }

    /// Builds the final `BrowserConfig`, validating it.
    pub fn build(self) -> Result<BrowserConfig> {
        let config = BrowserConfig {
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            logging: self.logging,
        };

        config.validate()?;

        Ok(config)
    }
}
