/// Fuzzy "did you mean" suggestions for mistyped column names.
use nucleo_matcher::{
    Matcher, Utf32Str,
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
};

/// Maximum number of suggestions returned by [`suggest_columns`].
pub const MAX_SUGGESTIONS: usize = 3;

/// Rank existing column names against a requested name.
///
/// The query is matched as plain fuzzy text; search syntax such as `!`, `^`,
/// `$` or `'` has no special meaning in a column name. Results are sorted by
/// score descending (best match first). An empty query yields no suggestions.
#[must_use]
pub fn suggest_columns<S: AsRef<str>>(columns: &[S], query: &str) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );
    let mut matcher = Matcher::new(nucleo_matcher::Config::DEFAULT);

    let mut scored: Vec<(u32, &str)> = columns
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter_map(|name| {
            let mut buf = Vec::new();
            let haystack = Utf32Str::new(name, &mut buf);
            pattern.score(haystack, &mut matcher).map(|score| (score, name))
        })
        .collect();

    // Stable sort keeps column order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored
        .into_iter()
        .take(MAX_SUGGESTIONS)
        .map(|(_, name)| name.to_owned())
        .collect()
}
