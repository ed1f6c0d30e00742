//! Raw catalog file records
//!
//! These structs represent the exact legacy JSON shape and nothing more;
//! normalization into domain types happens in the loader. Field names stay
//! camelCase to match the source files.

use serde::Deserialize;

/// Raw property record as stored in catalog JSON.
///
/// Each quoted attribute may appear as a scalar, a min/max pair, or both.
/// When both appear the pair is authoritative and the scalar is legacy
/// filtering data to be discarded (the anchor is always the pair's min).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProperty {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,

    pub price: Option<u64>,
    pub price_min: Option<u64>,
    pub price_max: Option<u64>,

    pub bedrooms: Option<u32>,
    pub bedrooms_min: Option<u32>,
    pub bedrooms_max: Option<u32>,

    pub bathrooms: u32,

    pub area: Option<u32>,
    pub area_min: Option<u32>,
    pub area_max: Option<u32>,

    pub location: String,

    /// Cover image for grid cards
    #[serde(default)]
    pub image: String,
    /// Gallery images; legacy files carry empty-string placeholders
    #[serde(default)]
    pub images: Vec<String>,

    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,

    pub agent: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub brochure_url: String,
}

/// Raw agent record as stored in catalog JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAgent {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub image: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub listings: u32,
}

/// Top-level catalog file: the ordered property list plus the agent
/// directory.
#[derive(Debug, Clone, Deserialize)]
pub struct RawCatalog {
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub agents: Vec<RawAgent>,
}
