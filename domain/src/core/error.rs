//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The filter engine itself is total: malformed criteria degrade to zero
/// matches rather than failing. Errors exist only at construction time, so a
/// catalog loader can reject bad records before they enter the engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("invalid range: min {min} exceeds max {max}")]
    InvalidRange { min: String, max: String },

    #[error("unknown property status: {0}")]
    UnknownStatus(String),

    #[error("property {0} has no images")]
    NoImages(String),

    #[error("duplicate property id: {0}")]
    DuplicateId(String),
}

impl DomainError {
    /// Build an `InvalidRange` from any displayable bound pair
    pub fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        DomainError::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}
