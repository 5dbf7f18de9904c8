//! Configuration types for a bump run
//!
//! These types define the tag policy applied to feed entries, where the
//! feed lives, and which manifest is rewritten.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

/// Complete bump configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct BumpConfig {
    /// Manifest (kustomization) settings
    #[serde(default)]
    pub manifest: ManifestConfig,

    /// Candidate tag policy
    #[serde(default)]
    pub policy: TagPolicy,

    /// Remote tag feed settings
    #[serde(default)]
    pub feed: FeedConfig,
}

/// Manifest location
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ManifestConfig {
    /// Path of the kustomization file to rewrite
    #[serde(default = "default_manifest_path")]
    pub path: Utf8PathBuf,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            path: default_manifest_path(),
        }
    }
}

fn default_manifest_path() -> Utf8PathBuf {
    Utf8PathBuf::from("/kustomization.yaml")
}

/// Rules deciding which feed tags may become candidates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct TagPolicy {
    /// Tags containing any of these substrings are never candidates
    #[serde(default = "default_forbidden_words")]
    pub forbidden_words: Vec<String>,

    /// Reject tags without a single digit
    #[serde(default = "default_require_digit")]
    pub require_digit: bool,
}

impl Default for TagPolicy {
    fn default() -> Self {
        Self {
            forbidden_words: default_forbidden_words(),
            require_digit: default_require_digit(),
        }
    }
}

impl TagPolicy {
    /// Parse a comma-separated word list, dropping empty items
    pub fn parse_word_list(list: &str) -> Vec<String> {
        list.split(',')
            .filter(|word| !word.is_empty())
            .map(String::from)
            .collect()
    }

    /// Replace the forbidden words from a comma-separated list
    pub fn with_forbidden_words(mut self, list: &str) -> Self {
        self.forbidden_words = Self::parse_word_list(list);
        self
    }

    /// Set the digit requirement
    pub fn with_require_digit(mut self, require_digit: bool) -> Self {
        self.require_digit = require_digit;
        self
    }
}

fn default_forbidden_words() -> Vec<String> {
    ["unstable", "latest", "testing", "arm64", "arm32"]
        .iter()
        .map(|w| w.to_string())
        .collect()
}
fn default_require_digit() -> bool {
    true
}

/// Remote tag feed settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct FeedConfig {
    /// Base URL serving `<namespace>/<name>.atom` feeds
    #[serde(default = "default_feed_url")]
    pub base_url: String,

    /// HTTP timeout in seconds
    #[serde(default = "default_http_timeout")]
    pub http_timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: default_feed_url(),
            http_timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_feed_url() -> String {
    "https://rss.p.theconnman.com".to_string()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!(
        "kbump/{} ({}; {})",
        env!("CARGO_PKG_VERSION"),
        std::env::consts::OS,
        std::env::consts::ARCH
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = TagPolicy::default();
        assert!(policy.require_digit);
        assert_eq!(
            policy.forbidden_words,
            vec!["unstable", "latest", "testing", "arm64", "arm32"]
        );
    }

    #[test]
    fn test_parse_word_list_drops_empty_items() {
        assert_eq!(TagPolicy::parse_word_list("a,,b,"), vec!["a", "b"]);
        assert!(TagPolicy::parse_word_list("").is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = "policy:\n  require-digit: false\nfeed:\n  http-timeout-secs: 5\n";
        let config: BumpConfig = serde_yaml_ng::from_str(yaml).unwrap();

        assert!(!config.policy.require_digit);
        assert_eq!(config.policy.forbidden_words.len(), 5);
        assert_eq!(config.feed.http_timeout_secs, 5);
        assert_eq!(config.feed.base_url, "https://rss.p.theconnman.com");
        assert_eq!(config.manifest.path, "/kustomization.yaml");
    }

    #[test]
    fn test_manifest_path_survives_yaml() {
        let yaml = "manifest:\n  path: overlays/prod/kustomization.yaml\n";
        let config: BumpConfig = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(config.manifest.path, "overlays/prod/kustomization.yaml");

        let written = serde_yaml_ng::to_string(&config).unwrap();
        assert!(written.contains("path: overlays/prod/kustomization.yaml"));

        let reread: BumpConfig = serde_yaml_ng::from_str(&written).unwrap();
        assert_eq!(reread.manifest.path, config.manifest.path);
    }
}
