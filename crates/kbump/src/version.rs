//! Build and version metadata

use serde::{Deserialize, Serialize};
use std::fmt;

/// Version metadata baked in at build time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionInfo {
    /// Crate version
    pub version: String,

    /// Short git commit of the build
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,

    /// Build date (YYYY-MM-DD)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_date: Option<String>,

    /// Target triple
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl VersionInfo {
    /// Version info of the running binary
    pub fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            commit: option_env!("GIT_SHA").map(String::from),
            build_date: option_env!("BUILD_DATE").map(String::from),
            target: option_env!("TARGET").map(String::from),
        }
    }

    /// Labelled build details, omitting unknown ones
    pub fn details(&self) -> Vec<(&'static str, &str)> {
        [
            ("Commit", self.commit.as_deref()),
            ("Build date", self.build_date.as_deref()),
            ("Target", self.target.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect()
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "kbump {}", self.version)?;
        if let Some(commit) = &self.commit {
            write!(f, " ({})", commit)?;
        }
        Ok(())
    }
}
