use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, Utc};
use kbump_core::types::FeedConfig;
use kbump_core::{FeedEntry, TagFeed};
use serde::Deserialize;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;
use tracing::{debug, trace};

/// Client for per-repository Atom feeds of published image tags.
///
/// The feed for `library/nginx` lives at `<base_url>/library/nginx.atom`,
/// with one `<entry>` per pushed tag titled `<repo>:<tag>`.
pub struct AtomFeedClient {
    client: reqwest::Client,
    base_url: String,
}

impl AtomFeedClient {
    /// Create a new feed client
    pub fn new(config: &FeedConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL of the feed for a repository
    pub fn feed_url(&self, repository: &str) -> String {
        format!("{}/{}.atom", self.base_url, repository)
    }

    /// Fetch and parse the feed of a repository
    pub async fn fetch_entries(&self, repository: &str) -> Result<Vec<FeedEntry>> {
        let url = self.feed_url(repository);
        debug!("Fetching tag feed from: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to connect to feed at {}", url))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(anyhow!("Feed returned {} for {}", status, url));
        }

        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read feed body from {}", url))?;

        let entries = parse_feed(&body).with_context(|| format!("Failed to parse feed from {}", url))?;
        trace!("Found {} entries for {}", entries.len(), repository);
        Ok(entries)
    }
}

impl TagFeed for AtomFeedClient {
    fn fetch<'a>(
        &'a self,
        repository: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<FeedEntry>>> + Send + 'a>> {
        Box::pin(self.fetch_entries(repository))
    }
}

/// Parse an Atom document into feed entries.
///
/// Entries without a usable `<published>` or `<updated>` date are skipped.
pub fn parse_feed(xml: &str) -> Result<Vec<FeedEntry>> {
    let feed: AtomFeed = quick_xml::de::from_str(xml)?;

    let entries = feed
        .entries
        .into_iter()
        .filter_map(|entry| {
            let title = entry.title.value.trim().to_string();
            let date = entry.published.or(entry.updated).map(|d| d.value);
            match date.as_deref().and_then(parse_date) {
                Some(published) => Some(FeedEntry::new(title, published)),
                None => {
                    debug!("Skipping {} due to missing publish date", title);
                    None
                }
            }
        })
        .collect();

    Ok(entries)
}

/// Parse an RFC 3339 timestamp, falling back to RFC 2822
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    DateTime::parse_from_rfc3339(s)
        .or_else(|_| DateTime::parse_from_rfc2822(s))
        .map(|d| d.with_timezone(&Utc))
        .ok()
}

// Internal types for the Atom document

#[derive(Debug, Deserialize)]
struct AtomFeed {
    #[serde(rename = "entry", default)]
    entries: Vec<AtomEntry>,
}

#[derive(Debug, Deserialize)]
struct AtomEntry {
    #[serde(default)]
    title: TextElement,
    #[serde(default)]
    published: Option<TextElement>,
    #[serde(default)]
    updated: Option<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
struct TextElement {
    #[serde(rename = "$text", default)]
    value: String,
}
