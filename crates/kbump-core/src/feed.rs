//! Source of published tags for a repository

use crate::types::FeedEntry;
use std::future::Future;
use std::pin::Pin;

/// Trait for fetching the published tags of a repository.
///
/// This abstracts the transport so that kbump-core does not depend on the
/// concrete HTTP client in kbump-feed. Tests can provide an in-memory feed.
pub trait TagFeed: Send + Sync {
    /// Fetch feed entries for a repository path (e.g., "library/nginx").
    ///
    /// Entry titles are expected as `<repo>:<tag>`; malformed ones are
    /// filtered out by the caller.
    fn fetch<'a>(
        &'a self,
        repository: &'a str,
    ) -> Pin<Box<dyn Future<Output = anyhow::Result<Vec<FeedEntry>>> + Send + 'a>>;
}
