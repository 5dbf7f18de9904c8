use super::filter::CandidateSet;
use super::tokenize::tokenize;
use crate::types::OldTag;
use std::collections::BTreeMap;
use tracing::{debug, trace};

/// Score added for each candidate token also present in the current tag
pub const MATCH_BONUS: i64 = 1000;

/// Score removed for each candidate token absent from the current tag
pub const MISMATCH_PENALTY: i64 = 100;

/// Lexical score of one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Token overlap score
    pub value: i64,
    /// Publish time of the candidate
    pub published: i64,
    /// Cleared when the candidate is older than the current tag
    pub eligible: bool,
}

/// Scores of every candidate against the current tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: BTreeMap<String, Score>,
}

impl ScoreTable {
    /// Score every candidate by token overlap with `old_tag`, without gating.
    pub fn raw(old_tag: &str, candidates: &CandidateSet) -> Self {
        let old_tokens = tokenize(old_tag);

        let scores = candidates
            .iter()
            .map(|(candidate, &published)| {
                let mut value = 0;
                for token in tokenize(candidate) {
                    if old_tokens.contains(&token) {
                        trace!("Increasing score due to matching token: {} {}", candidate, token);
                        value += MATCH_BONUS;
                    } else {
                        trace!("Decreasing score due to non matching token: {} {}", candidate, token);
                        value -= MISMATCH_PENALTY;
                    }
                }
                let score = Score {
                    value,
                    published,
                    eligible: true,
                };
                (candidate.clone(), score)
            })
            .collect();

        Self { scores }
    }

    /// Mark every candidate published strictly before `cutoff` as ineligible
    pub fn gate(&mut self, cutoff: i64) {
        for (tag, score) in self.scores.iter_mut() {
            if score.published < cutoff {
                debug!("Removing tag due to being older: {}", tag);
                score.eligible = false;
            }
        }
    }

    /// Score of a single candidate, eligible or not
    pub fn get(&self, tag: &str) -> Option<&Score> {
        self.scores.get(tag)
    }

    /// Candidates that survived the gate
    pub fn eligible(&self) -> impl Iterator<Item = (&str, &Score)> {
        self.scores
            .iter()
            .filter(|(_, score)| score.eligible)
            .map(|(tag, score)| (tag.as_str(), score))
    }

    /// Number of scored candidates, eligible or not
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Score candidates against the current tag and drop those older than it.
///
/// The current tag's own publish time is looked up in `candidates`; when it
/// is not there every candidate stays eligible.
pub fn score_candidates(old_tag: &OldTag, candidates: &CandidateSet) -> ScoreTable {
    let old_tag = old_tag.normalized();
    let mut table = ScoreTable::raw(old_tag, candidates);

    let cutoff = candidates.get(old_tag).copied().unwrap_or(0);
    table.gate(cutoff);

    table
}
