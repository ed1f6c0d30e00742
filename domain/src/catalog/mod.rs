//! The immutable catalog and agent directory

pub mod entities;

pub use entities::{AgentDirectory, Catalog};
