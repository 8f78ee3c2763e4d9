//! Draw a random sample of titles.
//!
//! Blank titles never appear in a sample, but the upper bound on the sample
//! size is checked against the whole list, blanks included. A request that
//! passes that check can still fail when too few eligible titles remain.

use catalog::MovieTitle;
use catalog::normalize::is_eligible;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{FilterError, Result};
use crate::traits::TitleFilter;

/// Picks `count` titles from distinct eligible positions.
///
/// ## Algorithm
/// 1. Reject `count <= 0`
/// 2. Reject `count` larger than the full input length
/// 3. Keep only eligible titles
/// 4. Partial Fisher-Yates shuffle of the first `count` slots
///
/// The order of the returned titles follows the draw, not the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSampleFilter {
    count: i64,
}

impl RandomSampleFilter {
    pub const DEFAULT_COUNT: i64 = 3;

    pub fn new(count: i64) -> Self {
        Self { count }
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Same as [`TitleFilter::apply`] but draws from the given generator.
    pub fn apply_with_rng<R: Rng + ?Sized>(
        &self,
        titles: Vec<MovieTitle>,
        rng: &mut R,
    ) -> Result<Vec<MovieTitle>> {
        if self.count <= 0 {
            return Err(FilterError::CountBelowMinimum {
                requested: self.count,
            });
        }

        let available = titles.len();
        let requested = match usize::try_from(self.count) {
            Ok(requested) if requested <= available => requested,
            _ => {
                return Err(FilterError::CountExceedsAvailable {
                    requested: self.count,
                    available,
                });
            }
        };

        let mut eligible: Vec<MovieTitle> = titles
            .into_iter()
            .filter(|title| is_eligible(title))
            .collect();

        if eligible.len() < requested {
            return Err(FilterError::InsufficientEligible {
                requested,
                eligible: eligible.len(),
            });
        }

        let (picked, _) = eligible.partial_shuffle(rng, requested);
        let sample: Vec<MovieTitle> = picked.iter_mut().map(std::mem::take).collect();

        tracing::debug!(
            "Sampled {} of {} eligible titles ({} total)",
            sample.len(),
            eligible.len(),
            available
        );
        Ok(sample)
    }
}

impl Default for RandomSampleFilter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT)
    }
}

impl TitleFilter for RandomSampleFilter {
    fn name(&self) -> &str {
        "RandomSampleFilter"
    }

    fn apply(&self, titles: Vec<MovieTitle>) -> Result<Vec<MovieTitle>> {
        self.apply_with_rng(titles, &mut rand::rng())
    }
}
