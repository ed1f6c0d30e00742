//! Listing value objects - immutable types shared by every record.
//!
//! # Identifiers
//! - [`PropertyId`] - Unique identifier for a property record
//! - [`AgentId`] - Identifier referencing an agent in the directory
//!
//! # Quoted figures
//! - [`Figure`] - A fixed value or a min-max range, for any attribute that
//!   can be quoted either way
//! - [`Price`], [`Bedrooms`], [`Area`] - The three figures a property carries

use crate::core::error::DomainError;
use serde::Serialize;
use std::fmt;

/// Unique identifier for a property record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PropertyId(String);

impl PropertyId {
    /// Creates a PropertyId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for PropertyId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier referencing an [`Agent`](super::entities::Agent) in the
/// directory.
///
/// Properties hold this reference without owning the agent; a lookup miss is
/// a valid outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an AgentId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for AgentId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A quoted figure: either a fixed value or a min-max range.
///
/// Multi-unit developments quote price, bedrooms and area as ranges ("3-4
/// BHK", "2484-3186 sqft"); single units quote fixed values. Consumers
/// pattern-match on the two shapes instead of probing for optional fields.
///
/// # Anchor
///
/// Filtering and ordering use a single representative number, the *anchor*:
/// the value of a [`Figure::Point`], the `min` of a [`Figure::Range`]. The
/// lower bound is deliberate - a range listing stays discoverable by buyers
/// searching at their budget floor.
///
/// # Example
///
/// ```
/// use silfira_domain::Figure;
///
/// let fixed = Figure::point(9_180_000u64);
/// let spread = Figure::range(11_040_000u64, 14_160_000).unwrap();
///
/// assert_eq!(fixed.anchor(), 9_180_000);
/// assert_eq!(spread.anchor(), 11_040_000);
/// assert_eq!(spread.to_string(), "11040000-14160000");
/// ```
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum Figure<T> {
    /// A single fixed value
    Point(T),
    /// An inclusive min-max range, `min <= max`
    Range { min: T, max: T },
}

/// A quoted price, in whole rupees.
pub type Price = Figure<u64>;

/// A quoted bedroom count (BHK).
pub type Bedrooms = Figure<u32>;

/// A quoted floor area, in square feet.
pub type Area = Figure<u32>;

impl<T: Copy + PartialOrd> Figure<T> {
    /// Create a fixed-value figure.
    pub fn point(value: T) -> Self {
        Figure::Point(value)
    }

    /// Create a range figure.
    ///
    /// Fails with [`DomainError::InvalidRange`] when `min > max`; a catalog
    /// loader must reject such a record rather than let it enter the engine.
    pub fn range(min: T, max: T) -> Result<Self, DomainError>
    where
        T: ToString,
    {
        if min > max {
            return Err(DomainError::invalid_range(min, max));
        }
        Ok(Figure::Range { min, max })
    }

    /// The representative number used for filtering and ordering.
    ///
    /// Total and pure: the stored value for a point, `min` for a range.
    pub fn anchor(&self) -> T {
        match *self {
            Figure::Point(value) => value,
            Figure::Range { min, .. } => min,
        }
    }

    /// Whether this figure is a min-max range.
    pub fn is_range(&self) -> bool {
        matches!(self, Figure::Range { .. })
    }
}

// Figures compare via their anchors only; ranges are never compared as
// intervals.
impl<T: Copy + PartialOrd> PartialEq for Figure<T> {
    fn eq(&self, other: &Self) -> bool {
        self.anchor() == other.anchor()
    }
}

impl<T: Copy + PartialOrd> PartialOrd for Figure<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        self.anchor().partial_cmp(&other.anchor())
    }
}

impl<T: fmt::Display> fmt::Display for Figure<T> {
    /// Undecorated display form: `"{value}"` or `"{min}-{max}"`.
    ///
    /// Currency symbols, digit grouping and unit suffixes are presentation
    /// concerns layered on top of this.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Point(value) => write!(f, "{}", value),
            Figure::Range { min, max } => write!(f, "{}-{}", min, max),
        }
    }
}
