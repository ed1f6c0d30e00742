//! Application layer for silfira-listings
//!
//! This crate contains the listing use cases, the catalog source port, and
//! presentation-facing parameters. It depends only on the domain layer.
//!
//! The three use cases are the only read surfaces the views need:
//! a featured highlight set, the filtered full listing, and a single-record
//! detail lookup joined with its agent.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ListingParams;
pub use ports::catalog_source::{CatalogSource, CatalogSourceError};
pub use use_cases::browse_listings::{BrowseListingsUseCase, BrowseOutput};
pub use use_cases::featured_listings::FeaturedListingsUseCase;
pub use use_cases::view_property::{PropertyView, ViewPropertyUseCase};
