//! Suggestion filtering: prefix matching with a Levenshtein tolerance.
//!
//! A candidate survives when the first `len(query)` graphemes of the
//! candidate are within `max_edit_distance` edits of the query. Lengths,
//! prefixes and distances are all measured in extended grapheme clusters, so
//! `"é"` written with a combining accent counts as one unit just like the
//! precomposed form.
//!
//! Results keep pool order. Nothing is re-ranked by distance; callers that
//! want the closest match first sort the pool themselves.

use super::options::MatchOptions;
use std::borrow::Cow;
use unicode_segmentation::UnicodeSegmentation;

/// Filters `pool` down to the candidates matching `query`.
///
/// Returns at most `options.max_results` strings, in pool order, with their
/// original casing. A query shorter than `options.min_query_length` yields
/// an empty result.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{filter, MatchOptions};
///
/// let pool = ["word", "lord", "cord", "sword"];
/// let opts = MatchOptions::new()
///     .with_case_sensitive(true)
///     .with_max_edit_distance(1);
/// assert_eq!(filter(&pool, "word", &opts), vec!["word", "lord", "cord"]);
/// ```
pub fn filter<S: AsRef<str>>(pool: &[S], query: &str, options: &MatchOptions) -> Vec<String> {
    let query = normalize(query, options.case_sensitive);
    let query: Vec<&str> = query.graphemes(true).collect();

    if !long_enough(query.len(), options) {
        return Vec::new();
    }

    let matched: Vec<String> = pool
        .iter()
        .map(AsRef::as_ref)
        .filter(|candidate| prefix_within(candidate, &query, options))
        .take(options.max_results)
        .map(str::to_string)
        .collect();

    log::trace!(
        "matched {} of {} candidates (query len {}, max distance {})",
        matched.len(),
        pool.len(),
        query.len(),
        options.max_edit_distance
    );

    matched
}

/// Reports whether a single candidate satisfies the match predicate.
///
/// The minimum query length is not consulted here; see [`filter`].
pub fn matches(candidate: &str, query: &str, options: &MatchOptions) -> bool {
    let query = normalize(query, options.case_sensitive);
    let query: Vec<&str> = query.graphemes(true).collect();
    prefix_within(candidate, &query, options)
}

/// Length of `query` in graphemes, as compared against
/// `options.min_query_length`.
///
/// Case-insensitive queries are measured after folding, so `"ß"` counts as
/// two units because it folds to `"ss"`.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::{query_length, MatchOptions};
///
/// let opts = MatchOptions::new();
/// assert_eq!(query_length("Straße", &opts), 7);
/// assert_eq!(query_length("Straße", &opts.with_case_sensitive(true)), 6);
/// ```
pub fn query_length(query: &str, options: &MatchOptions) -> usize {
    normalize(query, options.case_sensitive)
        .graphemes(true)
        .count()
}

/// Whether a query of `len` graphemes passes the minimum length check.
pub(crate) fn long_enough(len: usize, options: &MatchOptions) -> bool {
    len >= options.min_query_length
}

/// Levenshtein distance between two strings, counted in graphemes.
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::edit_distance;
///
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<&str> = a.graphemes(true).collect();
    let b: Vec<&str> = b.graphemes(true).collect();
    levenshtein_within(&a, &b, usize::MAX).unwrap_or(usize::MAX)
}

/// Levenshtein distance, or `None` as soon as it must exceed `max`.
pub fn bounded_edit_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<&str> = a.graphemes(true).collect();
    let b: Vec<&str> = b.graphemes(true).collect();
    levenshtein_within(&a, &b, max)
}

/// Folds case through uppercase first so that characters whose uppercase
/// form expands (`ß` to `SS`) compare equal to that form.
fn normalize(s: &str, case_sensitive: bool) -> Cow<'_, str> {
    if case_sensitive {
        Cow::Borrowed(s)
    } else {
        Cow::Owned(s.to_uppercase().to_lowercase())
    }
}

fn prefix_within(candidate: &str, query: &[&str], options: &MatchOptions) -> bool {
    let candidate = normalize(candidate, options.case_sensitive);
    let prefix: Vec<&str> = candidate.graphemes(true).take(query.len()).collect();
    levenshtein_within(&prefix, query, options.max_edit_distance).is_some()
}

/// Two-row Levenshtein with an early exit once a whole row exceeds `max`.
fn levenshtein_within<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let (m, n) = (a.len(), b.len());
    if m.abs_diff(n) > max {
        return None;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = usize::from(a[i - 1] != b[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
            row_min = row_min.min(curr[j]);
        }

        if row_min > max {
            return None;
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let distance = prev[n];
    (distance <= max).then_some(distance)
}
