use crate::types::{FeedEntry, TagPolicy};
use std::collections::BTreeMap;
use tracing::debug;

/// Candidate tags mapped to their publish time in seconds since epoch
pub type CandidateSet = BTreeMap<String, i64>;

/// Why a feed entry was left out of the candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Title has no `name:tag` separator
    Malformed,
    /// Tag has no digit while the policy requires one
    MissingDigit,
    /// Tag contains a forbidden word
    Forbidden,
}

/// Tally of what the filter did with a feed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterReport {
    pub accepted: usize,
    pub malformed: usize,
    pub missing_digit: usize,
    pub forbidden: usize,
}

impl FilterReport {
    fn record(&mut self, rejection: Rejection) {
        match rejection {
            Rejection::Malformed => self.malformed += 1,
            Rejection::MissingDigit => self.missing_digit += 1,
            Rejection::Forbidden => self.forbidden += 1,
        }
    }

    /// Total number of rejected entries
    pub fn rejected(&self) -> usize {
        self.malformed + self.missing_digit + self.forbidden
    }
}

/// Check a single feed title against the policy, returning its tag on success.
///
/// The digit and forbidden-word rules look at the whole title, repository
/// part included. The tag is everything after the first colon.
pub fn check_title<'a>(title: &'a str, policy: &TagPolicy) -> Result<&'a str, Rejection> {
    let (_repo, tag) = title.split_once(':').ok_or(Rejection::Malformed)?;

    if policy.require_digit && !title.chars().any(|c| c.is_ascii_digit()) {
        return Err(Rejection::MissingDigit);
    }

    if policy
        .forbidden_words
        .iter()
        .any(|word| title.contains(word.as_str()))
    {
        return Err(Rejection::Forbidden);
    }

    Ok(tag)
}

/// Build the candidate set from raw feed entries.
///
/// Rejected entries are skipped; a tag seen more than once keeps the
/// timestamp of its last occurrence.
pub fn filter_candidates(entries: &[FeedEntry], policy: &TagPolicy) -> (CandidateSet, FilterReport) {
    let mut candidates = CandidateSet::new();
    let mut report = FilterReport::default();

    for entry in entries {
        match check_title(&entry.title, policy) {
            Ok(tag) => {
                candidates.insert(tag.to_string(), entry.published.timestamp());
                report.accepted += 1;
            }
            Err(rejection) => {
                match rejection {
                    Rejection::Malformed => {
                        debug!("Skipping {} due to not having a tag", entry.title)
                    }
                    Rejection::MissingDigit => {
                        debug!("Skipping {} due to not having digits", entry.title)
                    }
                    Rejection::Forbidden => {
                        debug!("Skipping {} due to being forbidden", entry.title)
                    }
                }
                report.record(rejection);
            }
        }
    }

    (candidates, report)
}
