//! Presentation layer for silfira-listings
//!
//! This crate contains CLI definitions and output formatters, including the
//! locale decoration (rupee symbols, Indian digit grouping, unit suffixes)
//! that the domain's undecorated figure display deliberately leaves out.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, Command, OutputFormat, StatusArg};
pub use output::console::ConsoleFormatter;
pub use output::currency::{format_inr, rupees};
