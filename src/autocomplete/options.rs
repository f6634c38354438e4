//! Matching options and their validation.

use thiserror::Error;

/// Errors raised when configuring an autocomplete session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// `max_results` must allow at least one suggestion.
    #[error("max_results must be at least 1")]
    ZeroMaxResults,
}

/// Controls how candidates are matched against the query.
///
/// Options are built with chained `with_*` calls and checked with
/// [`MatchOptions::validate`] before a session accepts them.
///
/// # Examples
///
/// ```rust
/// use bubbletea_autocomplete::autocomplete::MatchOptions;
///
/// let opts = MatchOptions::new()
///     .with_case_sensitive(true)
///     .with_max_edit_distance(1)
///     .with_min_query_length(2)
///     .with_max_results(10);
/// assert!(opts.validate().is_ok());
/// assert!(MatchOptions::new().with_max_results(0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Compare without folding case when `true`.
    pub case_sensitive: bool,
    /// Largest Levenshtein distance between a candidate's prefix and the query.
    pub max_edit_distance: usize,
    /// Queries shorter than this (in graphemes) never produce suggestions.
    pub min_query_length: usize,
    /// Upper bound on returned suggestions. Must be at least 1.
    pub max_results: usize,
}

impl MatchOptions {
    /// Default options: case-insensitive exact-prefix matching from the first
    /// character, at most five suggestions.
    pub fn new() -> Self {
        Self {
            case_sensitive: false,
            max_edit_distance: 0,
            min_query_length: 1,
            max_results: 5,
        }
    }

    /// Sets case sensitivity.
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Sets the edit distance tolerance.
    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    /// Sets the minimum query length.
    pub fn with_min_query_length(mut self, len: usize) -> Self {
        self.min_query_length = len;
        self
    }

    /// Sets the result limit.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = max;
        self
    }

    /// Rejects nonsensical combinations.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        Ok(())
    }
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = MatchOptions::default();
        assert!(!opts.case_sensitive);
        assert_eq!(opts.max_edit_distance, 0);
        assert_eq!(opts.min_query_length, 1);
        assert_eq!(opts.max_results, 5);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_zero_max_results_rejected() {
        let err = MatchOptions::new().with_max_results(0).validate().unwrap_err();
        assert_eq!(err, ConfigError::ZeroMaxResults);
        assert_eq!(err.to_string(), "max_results must be at least 1");
    }

    #[test]
    fn test_zero_distance_and_length_allowed() {
        let opts = MatchOptions::new()
            .with_max_edit_distance(0)
            .with_min_query_length(0);
        assert!(opts.validate().is_ok());
    }
}
