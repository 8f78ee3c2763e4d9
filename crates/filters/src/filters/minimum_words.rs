//! Filter to keep titles with at least a minimum number of words.
//!
//! Words are the pieces of the trimmed title split on single spaces, so a
//! doubled space adds an (empty) word. Blank titles are always dropped, even
//! for a minimum of zero.

use catalog::MovieTitle;
use catalog::normalize::{is_eligible, space_token_count};

use crate::error::{FilterError, Result};
use crate::traits::TitleFilter;

/// Removes blank titles and titles with too few space-separated words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinimumWordCountFilter {
    minimum: i64,
}

impl MinimumWordCountFilter {
    pub const DEFAULT_MINIMUM: i64 = 1;

    pub fn new(minimum: i64) -> Self {
        Self { minimum }
    }

    pub fn minimum(&self) -> i64 {
        self.minimum
    }
}

impl Default for MinimumWordCountFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MINIMUM)
    }
}

impl TitleFilter for MinimumWordCountFilter {
    fn name(&self) -> &str {
        "MinimumWordCountFilter"
    }

    fn apply(&self, titles: Vec<MovieTitle>) -> Result<Vec<MovieTitle>> {
        let minimum = u64::try_from(self.minimum).map_err(|_| FilterError::NegativeMinimum {
            requested: self.minimum,
        })?;

        let filtered: Vec<MovieTitle> = titles
            .into_iter()
            .filter(|title| is_eligible(title) && space_token_count(title) as u64 >= minimum)
            .collect();

        tracing::debug!(
            "{} kept {} titles with at least {} words",
            self.name(),
            filtered.len(),
            minimum
        );
        Ok(filtered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn titles(items: &[&str]) -> Vec<MovieTitle> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_rejects_negative_minimum() {
        for minimum in [-1, -5, i64::MIN] {
            let err = MinimumWordCountFilter::new(minimum)
                .apply(titles(&["a b"]))
                .unwrap_err();
            assert_eq!(err.to_string(), "minimum count must be 0 or greater");
            assert_eq!(err.kind(), ErrorKind::NegativeValue);
        }
    }

    #[test]
    fn test_zero_minimum_drops_only_blanks() {
        let filtered = MinimumWordCountFilter::new(0)
            .apply(titles(&["a", " ", "b c", ""]))
            .unwrap();
        assert_eq!(filtered, vec!["a", "b c"]);
    }

    #[test]
    fn test_doubled_spaces_inflate_count() {
        let filtered = MinimumWordCountFilter::new(3)
            .apply(titles(&["one two", "one  two", "one\ttwo three"]))
            .unwrap();
        assert_eq!(filtered, vec!["one  two"]);
    }

    #[test]
    fn test_huge_minimum_yields_nothing() {
        let filtered = MinimumWordCountFilter::new(i64::MAX)
            .apply(titles(&["a b c d e f g"]))
            .unwrap();
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_default_minimum_keeps_single_words() {
        let filtered = MinimumWordCountFilter::default()
            .apply(titles(&["Incepcja", ""]))
            .unwrap();
        assert_eq!(filtered, vec!["Incepcja"]);
    }
}
