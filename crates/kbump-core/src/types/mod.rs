//! Type definitions shared across kbump crates

mod config_types;
mod image;

pub use config_types::*;
pub use image::*;
