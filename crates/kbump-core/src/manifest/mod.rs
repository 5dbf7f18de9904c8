//! Kustomization manifest handling

mod document;
mod updater;

pub use document::{display_name, image_ref, pinned_tag, Manifest};
pub use updater::{apply_tag, UpdateOutcome};
