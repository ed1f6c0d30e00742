//! Featured listings use case.
//!
//! Composes the compact highlight set for the home view: featured records in
//! catalog order, truncated to a limit. Filter criteria never apply here.

use silfira_domain::{Catalog, Property};
use std::sync::Arc;
use tracing::debug;

/// Use case for the featured highlight set.
pub struct FeaturedListingsUseCase {
    catalog: Arc<Catalog>,
}

impl FeaturedListingsUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// The ordered subsequence of `featured` records, at most `limit` long.
    pub fn execute(&self, limit: usize) -> Vec<&Property> {
        let selected: Vec<&Property> = self
            .catalog
            .properties()
            .iter()
            .filter(|property| property.featured)
            .take(limit)
            .collect();

        debug!(count = selected.len(), limit, "composed featured set");
        selected
    }
}
