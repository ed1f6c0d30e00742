//! Catalog source port
//!
//! Where catalog data originates (static file, embedded seed, remote API) is
//! out of the engine's scope; adapters hide it behind this trait. Loading
//! happens once at startup and the resulting [`Catalog`] is immutable.

use silfira_domain::{Catalog, DomainError};
use thiserror::Error;

/// Errors a catalog source can produce while loading.
///
/// Record-level problems (inverted ranges, missing images, duplicate ids)
/// must fail here, at load time, so the engine only ever sees valid records.
#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog: {0}")]
    Parse(String),

    #[error("invalid record {id}: {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: DomainError,
    },

    #[error("record {id} is missing required field {field}")]
    MissingField { id: String, field: &'static str },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// A source of catalog data, consulted once at startup.
pub trait CatalogSource {
    /// Load and validate the full catalog.
    fn load(&self) -> Result<Catalog, CatalogSourceError>;
}
