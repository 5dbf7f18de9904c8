//! CLI command implementations

pub mod bump;
pub mod version;
