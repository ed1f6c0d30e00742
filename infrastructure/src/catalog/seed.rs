//! Embedded seed catalog
//!
//! The Silfira launch dataset, compiled into the binary so the CLI works
//! with no catalog file configured. The JSON keeps the legacy duck-typed
//! shape, divergent scalars included, and goes through the same
//! normalization as any external file.

use crate::catalog::loader::build_catalog;
use silfira_application::{CatalogSource, CatalogSourceError};
use silfira_domain::Catalog;
use tracing::info;

const SEED_JSON: &str = include_str!("seed.json");

/// The built-in catalog source.
pub struct SeedCatalog;

impl CatalogSource for SeedCatalog {
    fn load(&self) -> Result<Catalog, CatalogSourceError> {
        let raw = serde_json::from_str(SEED_JSON)
            .map_err(|e| CatalogSourceError::Parse(e.to_string()))?;
        let catalog = build_catalog(raw)?;
        info!(
            properties = catalog.len(),
            agents = catalog.agents().len(),
            "seed catalog loaded"
        );
        Ok(catalog)
    }
}
