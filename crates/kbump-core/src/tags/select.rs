use super::score::ScoreTable;

/// Pick the best eligible candidate.
///
/// Highest score wins; ties go to the most recently published tag, then to
/// the lexicographically greatest one. There is no minimum score.
pub fn select_tag(table: &ScoreTable) -> Option<String> {
    table
        .eligible()
        .max_by(|(tag_a, a), (tag_b, b)| {
            a.value
                .cmp(&b.value)
                .then(a.published.cmp(&b.published))
                .then_with(|| tag_a.cmp(tag_b))
        })
        .map(|(tag, _)| tag.to_string())
}
