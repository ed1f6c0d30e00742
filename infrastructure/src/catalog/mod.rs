//! Catalog source adapters
//!
//! The legacy data shape is duck-typed (a record may or may not carry
//! `priceMin`/`priceMax` next to a scalar `price`, likewise for bedrooms and
//! area). [`records`] mirrors that shape verbatim; [`loader`] normalizes it
//! into the explicit domain model, failing fast on records the engine must
//! never see.

pub mod loader;
pub mod records;
pub mod seed;

pub use loader::JsonCatalogLoader;
pub use seed::SeedCatalog;
