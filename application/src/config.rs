//! Presentation-facing listing parameters
//!
//! These are display conventions, not engine rules: the evaluator accepts
//! any price window and any featured limit; these defaults are what the
//! views use when the user has not chosen otherwise.

use serde::{Deserialize, Serialize};

/// Parameters the views apply when composing listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingParams {
    /// How many featured records the highlight set shows
    pub featured_limit: usize,
    /// Lower bound of the price slider
    pub price_floor: u64,
    /// Upper bound of the price slider
    pub price_ceiling: u64,
}

impl ListingParams {
    /// Default inclusive slider window as price bounds.
    pub fn full_window(&self) -> (u64, u64) {
        (self.price_floor, self.price_ceiling)
    }
}

impl Default for ListingParams {
    fn default() -> Self {
        Self {
            featured_limit: 3,
            price_floor: 0,
            price_ceiling: 20_000_000,
        }
    }
}
