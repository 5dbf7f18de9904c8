//! Applying a selected tag to manifest entries

use super::document::{display_name, pinned_tag};
use crate::types::{OldTag, LATEST_TAG};
use serde_yaml_ng::Value;
use std::fmt;
use tracing::debug;

const NEW_TAG_KEY: &str = "newTag";

/// What happened to one manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The entry now pins a different tag
    Bumped {
        name: String,
        from: String,
        to: String,
    },
    /// Nothing better than the pinned tag was found
    NoNewImage { name: String, current: String },
}

impl UpdateOutcome {
    /// Image name as shown to users
    pub fn name(&self) -> &str {
        match self {
            Self::Bumped { name, .. } | Self::NoNewImage { name, .. } => name,
        }
    }

    pub fn is_bumped(&self) -> bool {
        matches!(self, Self::Bumped { .. })
    }
}

impl fmt::Display for UpdateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bumped { name, from, to } => write!(f, "Bumped {} from {} to {}", name, from, to),
            Self::NoNewImage { name, .. } => write!(f, "No new image found for {}", name),
        }
    }
}

/// Apply `selected` to every entry structurally equal to `target`.
///
/// Entries without a `newTag` get `latest` written first. Entries that do not
/// match `target` are never touched.
pub fn apply_tag(images: &mut [Value], target: &Value, selected: Option<&str>) -> Vec<UpdateOutcome> {
    let mut outcomes = Vec::new();

    for entry in images.iter_mut().filter(|entry| **entry == *target) {
        let Some(mapping) = entry.as_mapping_mut() else {
            continue;
        };
        if !mapping.contains_key(NEW_TAG_KEY) {
            mapping.insert(NEW_TAG_KEY.into(), LATEST_TAG.into());
        }

        let name = display_name(entry).to_string();
        let current = pinned_tag(entry);
        let current_text = tag_text(entry.get(NEW_TAG_KEY));

        let outcome = match selected {
            Some(new_tag) if current != OldTag::Explicit(new_tag.to_string()) => {
                if let Some(mapping) = entry.as_mapping_mut() {
                    mapping.insert(NEW_TAG_KEY.into(), new_tag.into());
                }
                debug!("Bumped {} from {} to {}", name, current_text, new_tag);
                UpdateOutcome::Bumped {
                    name,
                    from: current_text,
                    to: new_tag.to_string(),
                }
            }
            _ => {
                debug!("No new image found for {}", name);
                UpdateOutcome::NoNewImage {
                    name,
                    current: current_text,
                }
            }
        };
        outcomes.push(outcome);
    }

    outcomes
}

/// Render a raw `newTag` value for messages
fn tag_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Null) | None => LATEST_TAG.to_string(),
        Some(other) => serde_yaml_ng::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| LATEST_TAG.to_string()),
    }
}
