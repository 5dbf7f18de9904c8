//! Per-image bump pipeline
//!
//! Walks the manifest's images in order and, for each one, runs the feed
//! entries through filter, scorer and selector before applying the winner.
//! Images are processed strictly one after another; the first feed failure
//! aborts the run.

use crate::error::{Error, Result};
use crate::feed::TagFeed;
use crate::manifest::{apply_tag, image_ref, Manifest, UpdateOutcome};
use crate::tags::{filter_candidates, score_candidates, select_tag, FilterReport};
use crate::types::TagPolicy;
use tracing::{debug, info};

/// Result of processing one image entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReport {
    /// Repository the feed was fetched for
    pub repository: String,
    /// What the filter kept and dropped
    pub filter: FilterReport,
    /// Candidates still eligible after the publish-time gate
    pub eligible: usize,
    /// Winning tag, if any
    pub selected: Option<String>,
    /// Outcome for each manifest entry that was updated
    pub outcomes: Vec<UpdateOutcome>,
}

/// Result of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BumpReport {
    pub images: Vec<ImageReport>,
}

impl BumpReport {
    /// Every entry outcome, in processing order
    pub fn outcomes(&self) -> impl Iterator<Item = &UpdateOutcome> {
        self.images.iter().flat_map(|image| image.outcomes.iter())
    }

    /// Number of entries whose tag changed
    pub fn bumped(&self) -> usize {
        self.outcomes().filter(|o| o.is_bumped()).count()
    }
}

/// Drives tag selection for every image of a manifest
pub struct Bumper<'a> {
    feed: &'a dyn TagFeed,
    policy: &'a TagPolicy,
}

impl<'a> Bumper<'a> {
    pub fn new(feed: &'a dyn TagFeed, policy: &'a TagPolicy) -> Self {
        Self { feed, policy }
    }

    /// Process every image entry of the manifest, mutating it in place
    pub async fn run(&self, manifest: &mut Manifest) -> Result<BumpReport> {
        let mut report = BumpReport::default();

        for index in 0..manifest.images().len() {
            // Entries may already have been rewritten by an identical earlier entry.
            let target = manifest.images()[index].clone();
            let image = image_ref(&target);
            info!("Processing {}...", image.name);

            let entries = self
                .feed
                .fetch(&image.name)
                .await
                .map_err(|e| Error::feed(&image.name, e))?;
            debug!("Fetched {} feed entries for {}", entries.len(), image.name);

            let (candidates, filter) = filter_candidates(&entries, self.policy);
            let scores = score_candidates(&image.tag, &candidates);
            let eligible = scores.eligible().count();
            let selected = select_tag(&scores);
            debug!(
                "{}: {} candidates, {} eligible, selected {:?}",
                image.name,
                candidates.len(),
                eligible,
                selected
            );

            let outcomes = apply_tag(manifest.images_mut(), &target, selected.as_deref());

            report.images.push(ImageReport {
                repository: image.name,
                filter,
                eligible,
                selected,
                outcomes,
            });
        }

        Ok(report)
    }
}
