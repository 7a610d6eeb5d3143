//! # Core Runtime Module
//!
//! Provides foundational runtime infrastructure for the book browser core:
//! - Logging and tracing infrastructure
//! - Configuration management
//!
//! ## Overview
//!
//! This crate contains the runtime utilities that other modules depend on.
//! It establishes the configuration and logging conventions used throughout
//! the workspace.

pub mod config;
pub mod error;
pub mod logging;

pub use config::{BrowserConfig, BrowserConfigBuilder, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
pub use error::{Error, Result};
