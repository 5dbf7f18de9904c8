//! Tag candidate selection
//!
//! A feed is turned into a replacement tag in four steps:
//! - [`filter_candidates`] drops malformed and policy-rejected entries
//! - [`tokenize`] splits tags into comparable fragments
//! - [`score_candidates`] rates candidates by token overlap and gates out
//!   anything older than the current tag
//! - [`select_tag`] picks the winner

mod filter;
mod score;
mod select;
mod tokenize;

pub use filter::{check_title, filter_candidates, CandidateSet, FilterReport, Rejection};
pub use score::{score_candidates, Score, ScoreTable, MATCH_BONUS, MISMATCH_PENALTY};
pub use select::select_tag;
pub use tokenize::{tokenize, TokenSet};
