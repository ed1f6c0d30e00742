//! Infrastructure layer for silfira-listings
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer: catalog sources (JSON file, embedded seed) and
//! configuration file loading.

pub mod catalog;
pub mod config;

// Re-export commonly used types
pub use catalog::{JsonCatalogLoader, SeedCatalog};
pub use config::{
    ConfigLoader, ConfigValidationError, FileCatalogConfig, FileConfig, FileListingConfig,
    FileOutputConfig,
};
