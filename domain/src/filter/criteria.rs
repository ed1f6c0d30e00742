//! Active filter criteria
//!
//! Criteria are transient and caller-owned: UI controls build a fresh value
//! on every interaction and hand it to the evaluator, there is no
//! incremental mutation contract. The default value matches everything.

use crate::listing::entities::PropertyStatus;
use serde::Serialize;

/// Category filter: a specific property kind or the match-all sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum KindFilter {
    /// Match any category
    #[default]
    All,
    /// Match records whose `kind` equals this category exactly
    Only(String),
}

impl KindFilter {
    pub fn accepts(&self, kind: &str) -> bool {
        match self {
            KindFilter::All => true,
            KindFilter::Only(wanted) => wanted == kind,
        }
    }
}

/// Status filter: a specific market status or the match-all sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum StatusFilter {
    /// Match any status
    #[default]
    All,
    /// Match records with exactly this status
    Only(PropertyStatus),
}

impl StatusFilter {
    pub fn accepts(&self, status: PropertyStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

/// Inclusive price window, tested against the price anchor.
///
/// The engine accepts any window; a nonsensical one (min above max) simply
/// matches nothing. The presentation layer conventionally bounds its slider
/// to `[0, 20_000_000]`, but that convention is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceBounds {
    pub min: u64,
    pub max: u64,
}

impl PriceBounds {
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// The full representable window, matching every price.
    pub fn full() -> Self {
        Self {
            min: 0,
            max: u64::MAX,
        }
    }

    pub fn contains(&self, price: u64) -> bool {
        self.min <= price && price <= self.max
    }
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self::full()
    }
}

/// The current combination of search/category/status/price filters.
///
/// # Example
///
/// ```
/// use silfira_domain::FilterCriteria;
///
/// let criteria = FilterCriteria::default()
///     .with_search("atmos")
///     .with_price_bounds(0, 20_000_000);
/// assert!(!criteria.is_default());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterCriteria {
    /// Free-text needle, matched case-insensitively against title and
    /// location; empty matches everything
    pub search: String,
    pub kind: KindFilter,
    pub status: StatusFilter,
    pub price: PriceBounds,
}

impl FilterCriteria {
    /// Set the free-text search needle.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Restrict to one property category.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = KindFilter::Only(kind.into());
        self
    }

    /// Restrict to one market status.
    pub fn with_status(mut self, status: PropertyStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    /// Set the inclusive price window.
    pub fn with_price_bounds(mut self, min: u64, max: u64) -> Self {
        self.price = PriceBounds::new(min, max);
        self
    }

    /// Whether these criteria are the match-everything default.
    ///
    /// The "no matches" recovery affordance resets to this state.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
