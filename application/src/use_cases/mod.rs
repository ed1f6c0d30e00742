//! Listing use cases
//!
//! All three are stateless pure reads over a shared immutable catalog; there
//! is no lifecycle beyond "catalog loaded, queried any number of times".

pub mod browse_listings;
pub mod featured_listings;
pub mod view_property;
