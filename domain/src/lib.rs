//! Domain layer for silfira-listings
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Figure
//!
//! Several listing attributes (price, bedrooms, area) are quoted either as a
//! single value or as a min-max range; multi-unit developments usually quote
//! ranges. [`Figure`] is the tagged union covering both shapes, and every
//! consumer pattern-matches on it instead of probing for optional fields.
//!
//! ## Catalog
//!
//! The full, insertion-ordered set of [`Property`] records plus the agent
//! directory. It is built once at startup and never mutated; every query is
//! a pure function over it.
//!
//! ## Filter engine
//!
//! [`FilterCriteria`] holds the active search/category/status/price filters
//! and [`filter`] evaluates them as a stable, order-preserving selection.

pub mod catalog;
pub mod core;
pub mod filter;
pub mod listing;

// Re-export commonly used types
pub use catalog::{AgentDirectory, Catalog};
pub use crate::core::error::DomainError;
pub use filter::{
    criteria::{FilterCriteria, KindFilter, PriceBounds, StatusFilter},
    evaluator::{filter, matches},
};
pub use listing::{
    entities::{Agent, Property, PropertyStatus},
    value_objects::{AgentId, Area, Bedrooms, Figure, Price, PropertyId},
};
