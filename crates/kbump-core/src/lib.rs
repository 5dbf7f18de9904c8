//! # kbump-core
//!
//! Core library for kbump providing:
//! - Tag candidate filtering, scoring and selection
//! - Kustomization manifest loading, updating and saving
//! - Layered configuration (defaults, config file, KBUMP_* environment)
//! - The [`TagFeed`] seam implemented by kbump-feed

pub mod bump;
pub mod config;
pub mod error;
pub mod feed;
pub mod manifest;
pub mod tags;
pub mod types;

pub use bump::{BumpReport, Bumper, ImageReport};
pub use config::ConfigLoader;
pub use error::{Error, Result};
pub use feed::TagFeed;
pub use manifest::{Manifest, UpdateOutcome};
pub use types::{BumpConfig, FeedEntry, ImageRef, OldTag, TagPolicy};
