//! Filter implementations for movie titles.
//!
//! One module per operation; each type implements [`TitleFilter`](crate::TitleFilter).

pub mod leading_char;
pub mod minimum_words;
pub mod random_sample;

// Re-export for convenience
pub use leading_char::LeadingCharFilter;
pub use minimum_words::MinimumWordCountFilter;
pub use random_sample::RandomSampleFilter;
