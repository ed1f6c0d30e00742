//! Ports - interfaces the application defines and infrastructure implements

pub mod catalog_source;
