//! Keep titles that start with a given character and have an even length.
//!
//! The two halves of the test look at different strings: the leading
//! character is taken from the trimmed title, while the parity is taken from
//! the title exactly as stored. A surrounding space can therefore flip the
//! parity without changing the match.

use catalog::MovieTitle;
use catalog::normalize::{char_len, leading_char, same_char_ignoring_case};

use crate::error::{FilterError, Result};
use crate::traits::TitleFilter;

/// Filters titles by case-insensitive leading character and even code-point length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadingCharFilter {
    needle: String,
}

impl LeadingCharFilter {
    pub const DEFAULT_CHAR: &'static str = "W";

    /// Create a filter for the given character.
    ///
    /// The argument is a string so that callers can pass raw user input; it is
    /// checked to be exactly one code point when the filter is applied.
    pub fn new(needle: impl Into<String>) -> Self {
        Self {
            needle: needle.into(),
        }
    }

    pub fn needle(&self) -> &str {
        &self.needle
    }

    fn single_char(&self) -> Result<char> {
        let mut chars = self.needle.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(FilterError::NotSingleCharacter {
                found: char_len(&self.needle),
            }),
        }
    }
}

impl Default for LeadingCharFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CHAR)
    }
}

impl TitleFilter for LeadingCharFilter {
    fn name(&self) -> &str {
        "LeadingCharFilter"
    }

    fn apply(&self, titles: Vec<MovieTitle>) -> Result<Vec<MovieTitle>> {
        let needle = self.single_char()?;

        let filtered: Vec<MovieTitle> = titles
            .into_iter()
            .filter(|title| {
                leading_char(title).is_some_and(|first| same_char_ignoring_case(first, needle))
                    && char_len(title) % 2 == 0
            })
            .collect();

        tracing::debug!("{} kept {} titles for {:?}", self.name(), filtered.len(), needle);
        Ok(filtered)
    }
}
