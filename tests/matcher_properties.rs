//! Property-based invariant tests for the suggestion matcher.
//!
//! 1. Results are a subsequence of the pool.
//! 2. Results never exceed `max_results`.
//! 3. Every returned candidate satisfies the predicate.
//! 4. Every skipped candidate before the truncation point fails it.
//! 5. Distance zero is exact prefix matching.
//! 6. Case-insensitive matching ignores the case of pool and query.
//! 7. Filtering is deterministic.

use bubbletea_autocomplete::autocomplete::{
    edit_distance, filter, matches, query_length, MatchOptions,
};
use proptest::prelude::*;
use unicode_segmentation::UnicodeSegmentation;

// ── Helpers ─────────────────────────────────────────────────────────────

/// Mixes ASCII with letters whose case mappings change length or depend on
/// position: `ß` uppercases to `SS`, `İ` lowercases to `i` plus a combining
/// dot, and `Σ` lowercases to `ς` at the end of a word.
fn word_strategy() -> impl Strategy<Value = String> {
    "[a-dA-DßİıΣσς]{0,6}"
}

fn fold(s: &str, case_sensitive: bool) -> String {
    if case_sensitive {
        s.to_string()
    } else {
        s.to_uppercase().to_lowercase()
    }
}

fn pool_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_strategy(), 0..20)
}

fn options_strategy() -> impl Strategy<Value = MatchOptions> {
    (any::<bool>(), 0usize..3, 0usize..3, 1usize..10).prop_map(|(cs, dist, min, max)| {
        MatchOptions::new()
            .with_case_sensitive(cs)
            .with_max_edit_distance(dist)
            .with_min_query_length(min)
            .with_max_results(max)
    })
}

fn is_subsequence(result: &[String], pool: &[String]) -> bool {
    let mut it = pool.iter();
    result.iter().all(|r| it.any(|p| p == r))
}

// ═════════════════════════════════════════════════════════════════════════
// 1–3. Shape of the result
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn result_is_bounded_subsequence_of_matches(
        pool in pool_strategy(),
        query in word_strategy(),
        opts in options_strategy()
    ) {
        let result = filter(&pool, &query, &opts);
        prop_assert!(result.len() <= opts.max_results);
        prop_assert!(is_subsequence(&result, &pool), "{:?} not in {:?}", result, pool);
        for candidate in &result {
            prop_assert!(matches(candidate, &query, &opts), "{} should match {}", candidate, query);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Nothing is skipped before truncation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn result_is_the_first_matches(
        pool in pool_strategy(),
        query in word_strategy(),
        opts in options_strategy()
    ) {
        let result = filter(&pool, &query, &opts);
        let expected: Vec<String> = if query_length(&query, &opts) < opts.min_query_length {
            Vec::new()
        } else {
            pool.iter()
                .filter(|c| matches(c, &query, &opts))
                .take(opts.max_results)
                .cloned()
                .collect()
        };
        prop_assert_eq!(result, expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Distance zero is exact prefix matching
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn zero_distance_is_prefix_match(
        pool in pool_strategy(),
        query in word_strategy(),
        case_sensitive in any::<bool>()
    ) {
        let opts = MatchOptions::new()
            .with_case_sensitive(case_sensitive)
            .with_min_query_length(0)
            .with_max_results(usize::MAX);
        let query_folded = fold(&query, case_sensitive);
        let query_units: Vec<&str> = query_folded.graphemes(true).collect();
        let expected: Vec<String> = pool
            .iter()
            .filter(|c| {
                let folded = fold(c.as_str(), case_sensitive);
                let units: Vec<&str> = folded.graphemes(true).collect();
                units.starts_with(&query_units)
            })
            .cloned()
            .collect();
        prop_assert_eq!(filter(&pool, &query, &opts), expected);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Case folding
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn case_insensitive_ignores_case(
        pool in pool_strategy(),
        query in word_strategy(),
        opts in options_strategy()
    ) {
        let opts = opts.with_case_sensitive(false);
        let upper_pool: Vec<String> = pool.iter().map(|s| s.to_uppercase()).collect();

        let lower: Vec<String> = filter(&pool, &query, &opts)
            .iter()
            .map(|s| s.to_uppercase())
            .collect();
        let upper = filter(&upper_pool, &query.to_uppercase(), &opts);
        prop_assert_eq!(lower, upper);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Determinism and distance sanity
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn filter_is_deterministic(
        pool in pool_strategy(),
        query in word_strategy(),
        opts in options_strategy()
    ) {
        prop_assert_eq!(filter(&pool, &query, &opts), filter(&pool, &query, &opts));
    }

    #[test]
    fn edit_distance_is_symmetric_and_bounded(a in word_strategy(), b in word_strategy()) {
        let d = edit_distance(&a, &b);
        prop_assert_eq!(d, edit_distance(&b, &a));
        let (la, lb) = (a.graphemes(true).count(), b.graphemes(true).count());
        prop_assert!(d <= la.max(lb));
        prop_assert!(d >= la.abs_diff(lb));
        prop_assert_eq!(d == 0, a == b);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Worked examples
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn one_edit_tolerance_excludes_sword() {
    let pool = ["word", "lord", "cord", "sword"];
    let opts = MatchOptions::new()
        .with_case_sensitive(true)
        .with_max_edit_distance(1);
    assert_eq!(filter(&pool, "word", &opts), vec!["word", "lord", "cord"]);
}

#[test]
fn sharp_s_folds_like_its_uppercase_form() {
    let opts = MatchOptions::new();
    let pool = ["Straße", "strasse", "Strand"];
    assert_eq!(filter(&pool, "strass", &opts), vec!["Straße", "strasse"]);
    assert_eq!(filter(&["ß"], "s", &opts), vec!["ß"]);
    assert_eq!(filter(&["SS"], "S", &opts), vec!["SS"]);
}

#[test]
fn short_query_yields_nothing_for_any_pool() {
    let pool = ["a", "ab", "abc", "b"];
    let opts = MatchOptions::new().with_min_query_length(2);
    assert!(filter(&pool, "a", &opts).is_empty());
    assert!(filter(&pool, "", &opts).is_empty());
}
