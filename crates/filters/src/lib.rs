//! Filtering operations over lists of movie titles.
//!
//! This crate provides:
//! - The `TitleFilter` trait and its three implementations
//! - One free function per operation, for callers that do not need a filter value
//! - `FilterError`, shared by all operations
//!
//! All operations validate their parameter first and never return a partial
//! result. The titles are taken by value; pass `catalog.to_vec()` to run an
//! operation over a [`catalog::Catalog`].
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use filters::{filter_by_leading_char_even_length, sample_random_titles};
//!
//! let catalog = Catalog::builtin();
//! let picks = sample_random_titles(3, catalog.to_vec())?;
//! let w_titles = filter_by_leading_char_even_length("W", catalog.to_vec())?;
//! ```

pub mod error;
pub mod filters;
pub mod traits;

use catalog::MovieTitle;
use rand::Rng;

// Re-export main types
pub use error::{ErrorKind, FilterError, Result};
pub use filters::{LeadingCharFilter, MinimumWordCountFilter, RandomSampleFilter};
pub use traits::TitleFilter;

/// Draw `count` titles from distinct eligible positions using the thread-local generator.
pub fn sample_random_titles(count: i64, titles: Vec<MovieTitle>) -> Result<Vec<MovieTitle>> {
    RandomSampleFilter::new(count).apply(titles)
}

/// Like [`sample_random_titles`], drawing from `rng`.
pub fn sample_random_titles_with_rng<R: Rng + ?Sized>(
    count: i64,
    titles: Vec<MovieTitle>,
    rng: &mut R,
) -> Result<Vec<MovieTitle>> {
    RandomSampleFilter::new(count).apply_with_rng(titles, rng)
}

/// Titles whose trimmed form starts with `needle` (ignoring case) and whose
/// untrimmed length is even.
pub fn filter_by_leading_char_even_length(
    needle: &str,
    titles: Vec<MovieTitle>,
) -> Result<Vec<MovieTitle>> {
    LeadingCharFilter::new(needle).apply(titles)
}

/// Non-blank titles with at least `minimum` space-separated words.
pub fn filter_by_minimum_word_count(
    minimum: i64,
    titles: Vec<MovieTitle>,
) -> Result<Vec<MovieTitle>> {
    MinimumWordCountFilter::new(minimum).apply(titles)
}
