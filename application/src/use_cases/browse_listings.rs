//! Browse listings use case.
//!
//! Composes the filtered full listing for the catalog view: a stable
//! selection over the catalog plus the count the results bar displays.
//! Safe to re-run on every criteria change; the output is fully determined
//! by the catalog and the criteria.

use silfira_domain::{Catalog, FilterCriteria, Property, filter};
use std::sync::Arc;
use tracing::debug;

/// Result of a browse: the selected records plus their count.
///
/// An empty selection is a valid, representable state ("no matches"); the
/// caller offers a criteria reset to recover, the engine does not.
#[derive(Debug)]
pub struct BrowseOutput<'a> {
    properties: Vec<&'a Property>,
}

impl<'a> BrowseOutput<'a> {
    /// The selected records, in catalog order.
    pub fn properties(&self) -> &[&'a Property] {
        &self.properties
    }

    /// How many records matched, for the "Showing N properties" bar.
    pub fn count(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

/// Use case for the filtered catalog view.
pub struct BrowseListingsUseCase {
    catalog: Arc<Catalog>,
}

impl BrowseListingsUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Apply `criteria` to the catalog, preserving record order.
    pub fn execute(&self, criteria: &FilterCriteria) -> BrowseOutput<'_> {
        let properties = filter(self.catalog.properties(), criteria);
        debug!(
            count = properties.len(),
            total = self.catalog.len(),
            "composed browse listing"
        );
        BrowseOutput { properties }
    }
}
