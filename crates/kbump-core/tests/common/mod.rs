//! Shared helpers for kbump-core integration tests

#![allow(dead_code)]

use anyhow::anyhow;
use chrono::{TimeZone, Utc};
use kbump_core::tags::CandidateSet;
use kbump_core::{FeedEntry, TagFeed};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Mutex;

/// Feed entry published `secs` seconds after the epoch
pub fn entry(title: &str, secs: i64) -> FeedEntry {
    FeedEntry::new(title, Utc.timestamp_opt(secs, 0).unwrap())
}

/// Candidate set from `(tag, timestamp)` pairs
pub fn candidates(items: &[(&str, i64)]) -> CandidateSet {
    items.iter().map(|(t, ts)| (t.to_string(), *ts)).collect()
}

/// In-memory feed keyed by repository path
#[derive(Default)]
pub struct StaticFeed {
    feeds: HashMap<String, Vec<FeedEntry>>,
    failing: Vec<String>,
    requests: Mutex<Vec<String>>,
}

impl StaticFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `entries` for `repository`
    pub fn with(mut self, repository: &str, entries: Vec<FeedEntry>) -> Self {
        self.feeds.insert(repository.to_string(), entries);
        self
    }

    /// Fail every fetch of `repository`
    pub fn failing(mut self, repository: &str) -> Self {
        self.failing.push(repository.to_string());
        self
    }

    /// Repositories fetched so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl TagFeed for StaticFeed {
    fn fetch<'a>(
        &'a self,
        repository: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Vec<FeedEntry>>> + Send + 'a>> {
        Box::pin(async move {
            self.requests.lock().unwrap().push(repository.to_string());
            if self.failing.iter().any(|r| r == repository) {
                return Err(anyhow!("feed unavailable"));
            }
            Ok(self.feeds.get(repository).cloned().unwrap_or_default())
        })
    }
}
