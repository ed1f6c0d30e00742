//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted into application parameters
//! where appropriate.

use serde::{Deserialize, Serialize};
use silfira_application::ListingParams;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("featured_limit cannot be 0")]
    ZeroFeaturedLimit,

    #[error("price_floor {floor} exceeds price_ceiling {ceiling}")]
    InvertedPriceWindow { floor: u64, ceiling: u64 },
}

/// Raw catalog configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    /// Path to a catalog JSON file; the embedded seed is used when unset
    pub path: Option<String>,
}

/// Raw listing configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileListingConfig {
    /// How many featured records the highlight set shows
    pub featured_limit: usize,
    /// Price slider lower bound
    pub price_floor: u64,
    /// Price slider upper bound
    pub price_ceiling: u64,
}

impl Default for FileListingConfig {
    fn default() -> Self {
        let params = ListingParams::default();
        Self {
            featured_limit: params.featured_limit,
            price_floor: params.price_floor,
            price_ceiling: params.price_ceiling,
        }
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Complete raw configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub catalog: FileCatalogConfig,
    pub listing: FileListingConfig,
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Check cross-field constraints the types cannot express.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.listing.featured_limit == 0 {
            return Err(ConfigValidationError::ZeroFeaturedLimit);
        }
        if self.listing.price_floor > self.listing.price_ceiling {
            return Err(ConfigValidationError::InvertedPriceWindow {
                floor: self.listing.price_floor,
                ceiling: self.listing.price_ceiling,
            });
        }
        Ok(())
    }

    /// Convert the listing section into application parameters.
    pub fn listing_params(&self) -> ListingParams {
        ListingParams {
            featured_limit: self.listing.featured_limit,
            price_floor: self.listing.price_floor,
            price_ceiling: self.listing.price_ceiling,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        let config = FileConfig::default();
        config.validate().unwrap();
        assert_eq!(config.listing_params(), ListingParams::default());
        assert!(config.catalog.path.is_none());
        assert!(config.output.color);
    }

    #[test]
    fn test_zero_featured_limit_rejected() {
        let mut config = FileConfig::default();
        config.listing.featured_limit = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::ZeroFeaturedLimit)
        ));
    }

    #[test]
    fn test_inverted_window_rejected() {
        let mut config = FileConfig::default();
        config.listing.price_floor = 30_000_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigValidationError::InvertedPriceWindow { .. })
        ));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: FileConfig =
            toml::from_str("[listing]\nfeatured_limit = 6\n").unwrap();
        assert_eq!(config.listing.featured_limit, 6);
        assert_eq!(config.listing.price_ceiling, 20_000_000);
        assert!(config.output.color);
    }
}
