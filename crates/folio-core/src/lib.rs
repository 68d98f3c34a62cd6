//! Folio Core Library
//!
//! This crate provides the core functionality for Folio, including:
//! - Synthetic project record generation from category templates
//! - Catalog of curated plus generated records with filtering and pagination
//! - JSON / JSONL export and import
//! - Configuration with TOML persistence

pub mod catalog;
pub mod config;
pub mod error;
pub mod export;
pub mod generator;

pub use error::{Error, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{Catalog, ProjectQuery};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result};
    pub use crate::generator::{Category, ProjectGenerator, ProjectRecord, ProjectStatus};
}
