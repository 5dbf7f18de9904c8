use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_yaml_ng::Value;
use std::fmt;

/// Tag used when a manifest entry pins nothing usable
pub const LATEST_TAG: &str = "latest";

/// Namespace prepended to single-segment repository names
pub const DEFAULT_NAMESPACE: &str = "library";

/// Tag currently pinned by a manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OldTag {
    /// `newTag` is a string
    Explicit(String),
    /// `newTag` is missing
    Absent,
    /// `newTag` is any other YAML value (number, boolean, null, nested)
    NonString,
}

impl OldTag {
    /// Classify the raw `newTag` value of a manifest entry
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => Self::Absent,
            Some(Value::String(s)) => Self::Explicit(s.clone()),
            Some(_) => Self::NonString,
        }
    }

    /// The tag to compare against, falling back to `latest`
    pub fn normalized(&self) -> &str {
        match self {
            Self::Explicit(s) if !s.is_empty() => s,
            _ => LATEST_TAG,
        }
    }
}

impl fmt::Display for OldTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.normalized())
    }
}

/// Image reference derived from a manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Repository path with namespace (e.g., "library/nginx")
    pub name: String,
    /// Currently pinned tag
    pub tag: OldTag,
}

impl ImageRef {
    /// Build a reference, qualifying bare names with the default namespace
    pub fn new(name: &str, tag: OldTag) -> Self {
        let name = if name.contains('/') {
            name.to_string()
        } else {
            format!("{}/{}", DEFAULT_NAMESPACE, name)
        };
        Self { name, tag }
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.tag)
    }
}

/// One published entry of a tag feed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    /// Entry title, expected as `<repo>:<tag>`
    pub title: String,
    /// Publish time
    pub published: DateTime<Utc>,
}

impl FeedEntry {
    pub fn new(title: impl Into<String>, published: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            published,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_old_tag_classification() {
        assert_eq!(OldTag::from_value(None), OldTag::Absent);
        assert_eq!(
            OldTag::from_value(Some(&Value::String("1.25-alpine".into()))),
            OldTag::Explicit("1.25-alpine".into())
        );
        assert_eq!(
            OldTag::from_value(Some(&Value::Bool(true))),
            OldTag::NonString
        );
        assert_eq!(OldTag::from_value(Some(&Value::Null)), OldTag::NonString);

        // 1.10 parses as the float 1.1; it must not pose as tag "1.1"
        let number: Value = serde_yaml_ng::from_str("1.10").unwrap();
        assert_eq!(OldTag::from_value(Some(&number)), OldTag::NonString);
        assert_eq!(OldTag::from_value(Some(&number)).normalized(), "latest");

        let integer: Value = serde_yaml_ng::from_str("16").unwrap();
        assert_eq!(OldTag::from_value(Some(&integer)), OldTag::NonString);
    }

    #[test]
    fn test_old_tag_normalization() {
        assert_eq!(OldTag::Absent.normalized(), "latest");
        assert_eq!(OldTag::NonString.normalized(), "latest");
        assert_eq!(OldTag::Explicit(String::new()).normalized(), "latest");
        assert_eq!(OldTag::Explicit("v2".into()).normalized(), "v2");
    }

    #[test]
    fn test_image_ref_default_namespace() {
        let img = ImageRef::new("nginx", OldTag::Absent);
        assert_eq!(img.name, "library/nginx");
        assert_eq!(img.to_string(), "library/nginx:latest");

        let img = ImageRef::new("bitnami/redis", OldTag::Explicit("7.2".into()));
        assert_eq!(img.name, "bitnami/redis");
        assert_eq!(img.to_string(), "bitnami/redis:7.2");
    }
}
