use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Lexical fragments of a tag
pub type TokenSet = BTreeSet<String>;

static ALPHA_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[a-zA-Z]+").expect("static regex is valid"));

/// Split a tag into its hyphen-delimited segments plus every alphabetic run.
///
/// `1.25.3-alpine3.19` yields `{"1.25.3", "alpine3.19", "alpine"}`. Case is
/// preserved, and a doubled, leading or trailing `-` contributes the empty
/// segment `""` like any other.
pub fn tokenize(tag: &str) -> TokenSet {
    let segments = tag.split('-');
    let words = ALPHA_RUN.find_iter(tag).map(|m| m.as_str());

    segments.chain(words).map(String::from).collect()
}
