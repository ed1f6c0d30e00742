//! Listing records and their value objects

pub mod entities;
pub mod value_objects;

pub use entities::{Agent, Property, PropertyStatus};
pub use value_objects::{AgentId, Area, Bedrooms, Figure, Price, PropertyId};
