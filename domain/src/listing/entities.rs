//! Property and agent records
//!
//! Records are immutable once loaded: the catalog is built at startup and
//! every view is derived from it by pure functions.

use crate::core::error::DomainError;
use crate::listing::value_objects::{AgentId, Area, Bedrooms, Price, PropertyId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market status of a property (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyStatus {
    ForSale,
    ForRent,
}

impl PropertyStatus {
    /// Get the string identifier for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "for-sale",
            PropertyStatus::ForRent => "for-rent",
        }
    }

    /// Human-readable label for display ("For Sale" / "For Rent")
    pub fn label(&self) -> &'static str {
        match self {
            PropertyStatus::ForSale => "For Sale",
            PropertyStatus::ForRent => "For Rent",
        }
    }
}

impl fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PropertyStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "for-sale" => Ok(PropertyStatus::ForSale),
            "for-rent" => Ok(PropertyStatus::ForRent),
            other => Err(DomainError::UnknownStatus(other.to_string())),
        }
    }
}

/// A single catalog listing.
///
/// Price, bedrooms and area are quoted [`Figure`](super::value_objects::Figure)s
/// and may each be a fixed value or a range; everything else is scalar. The
/// `agent_id` references the agent directory without owning the agent.
#[derive(Debug, Clone, Serialize)]
pub struct Property {
    /// Unique, immutable identity
    pub id: PropertyId,
    pub title: String,
    /// Category string, e.g. "Apartment"
    pub kind: String,
    pub status: PropertyStatus,
    pub price: Price,
    pub bedrooms: Bedrooms,
    pub bathrooms: u32,
    /// Floor area in square feet
    pub area: Area,
    pub location: String,
    /// Ordered, non-empty; the first entry is the cover image
    pub images: Vec<String>,
    pub description: String,
    pub features: Vec<String>,
    /// Reference into the agent directory
    pub agent_id: AgentId,
    /// Marked for promotional highlighting, independent of any filter
    pub featured: bool,
    /// Opaque external brochure reference
    pub brochure: String,
}

impl Property {
    /// The primary image shown on grid cards.
    ///
    /// The non-empty `images` invariant is enforced at load time, so the
    /// first entry always exists.
    pub fn cover_image(&self) -> &str {
        self.images.first().map(String::as_str).unwrap_or_default()
    }
}

/// An agent from the directory.
///
/// Referenced by id from property records, never owned by them. `listings`
/// is informational marketing copy, not derived from the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Agent {
    pub id: AgentId,
    pub name: String,
    pub title: String,
    pub photo: String,
    pub email: String,
    pub phone: String,
    pub bio: String,
    pub specialties: Vec<String>,
    pub listings: u32,
}
