//! Configuration loading

mod loader;

pub use loader::{parse_bool, ConfigLoader, CONFIG_ENV};
