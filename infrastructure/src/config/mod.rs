//! Configuration file loading

pub mod file_config;
pub mod loader;

pub use file_config::{
    ConfigValidationError, FileCatalogConfig, FileConfig, FileListingConfig, FileOutputConfig,
};
pub use loader::ConfigLoader;
