//! Kustomization document loading and saving

use crate::error::{Error, Result};
use crate::types::{ImageRef, OldTag};
use camino::Utf8Path;
use serde_yaml_ng::Value;
use std::fs;
use tracing::debug;

/// Key of the image list in a kustomization
const IMAGES_KEY: &str = "images";

/// A kustomization document with a validated `images` list.
///
/// The whole document is kept as a YAML value so keys the tool does not
/// know about survive a load/save cycle in their original order.
#[derive(Debug, Clone, PartialEq)]
pub struct Manifest {
    document: Value,
}

impl Manifest {
    /// Load a manifest from disk
    pub fn load(path: &Utf8Path) -> Result<Self> {
        debug!("Reading manifest {}", path);
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse a manifest from YAML text
    pub fn parse(content: &str) -> Result<Self> {
        let document: Value = serde_yaml_ng::from_str(content)?;

        let mapping = document
            .as_mapping()
            .ok_or_else(|| Error::invalid_manifest("document is not a mapping"))?;

        let images = mapping
            .get(IMAGES_KEY)
            .ok_or_else(|| Error::missing_field(IMAGES_KEY))?
            .as_sequence()
            .ok_or_else(|| Error::invalid_manifest("'images' is not a list"))?;

        for (index, entry) in images.iter().enumerate() {
            let entry = entry.as_mapping().ok_or_else(|| {
                Error::invalid_manifest(format!("images[{}] is not a mapping", index))
            })?;
            if !matches!(entry.get("name"), Some(Value::String(_))) {
                return Err(Error::missing_field(format!("images[{}].name", index)));
            }
        }

        Ok(Self { document })
    }

    /// Serialize the manifest back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(&self.document)?)
    }

    /// Write the manifest to disk
    pub fn save(&self, path: &Utf8Path) -> Result<()> {
        debug!("Writing manifest {}", path);
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    /// Image entries in document order
    pub fn images(&self) -> &[Value] {
        self.document
            .get(IMAGES_KEY)
            .and_then(Value::as_sequence)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Mutable image entries in document order
    pub fn images_mut(&mut self) -> &mut [Value] {
        self.document
            .get_mut(IMAGES_KEY)
            .and_then(Value::as_sequence_mut)
            .map(Vec::as_mut_slice)
            .unwrap_or_default()
    }
}

/// Name shown to users: `newName` when set, otherwise `name`
pub fn display_name(entry: &Value) -> &str {
    entry
        .get("newName")
        .and_then(Value::as_str)
        .or_else(|| entry.get("name").and_then(Value::as_str))
        .unwrap_or_default()
}

/// Tag currently pinned by an entry
pub fn pinned_tag(entry: &Value) -> OldTag {
    OldTag::from_value(entry.get("newTag"))
}

/// Repository and tag an entry resolves to
pub fn image_ref(entry: &Value) -> ImageRef {
    ImageRef::new(display_name(entry), pinned_tag(entry))
}
