//! # Filter Movies Service
//!
//! Binds the three title filters to a shared catalog:
//! 1. Substitute the default parameter when the caller gave none
//! 2. Run the filter over a copy of the catalog
//! 3. Log the outcome
//!
//! Rendering for the HTTP layer lives here too, so that handlers stay one-liners.

use std::sync::Arc;

use tracing::{info, warn};

use catalog::{Catalog, MovieTitle};
use filters::{
    LeadingCharFilter, MinimumWordCountFilter, RandomSampleFilter, Result, TitleFilter,
};

/// Separator placed between titles in a rendered response.
pub const LINE_BREAK: &str = "</br>";

/// Runs the title filters against one immutable catalog.
#[derive(Debug, Clone)]
pub struct FilterMoviesService {
    catalog: Arc<Catalog>,
}

impl FilterMoviesService {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Random sample of `count` titles (default 3).
    pub fn random_titles(&self, count: Option<i64>) -> Result<Vec<MovieTitle>> {
        let filter = count.map_or_else(RandomSampleFilter::default, RandomSampleFilter::new);
        self.run(&filter, &format!("count={}", filter.count()))
    }

    /// Titles starting with `needle` (default `W`) with an even length.
    pub fn titles_by_leading_char(&self, needle: Option<&str>) -> Result<Vec<MovieTitle>> {
        let filter = needle.map_or_else(LeadingCharFilter::default, LeadingCharFilter::new);
        self.run(&filter, &format!("char={:?}", filter.needle()))
    }

    /// Titles with at least `minimum` words (default 1).
    pub fn titles_by_minimum_words(&self, minimum: Option<i64>) -> Result<Vec<MovieTitle>> {
        let filter =
            minimum.map_or_else(MinimumWordCountFilter::default, MinimumWordCountFilter::new);
        self.run(&filter, &format!("minimum={}", filter.minimum()))
    }

    fn run(&self, filter: &dyn TitleFilter, params: &str) -> Result<Vec<MovieTitle>> {
        match filter.apply(self.catalog.to_vec()) {
            Ok(titles) => {
                info!(
                    "{} ({}) returned {} of {} titles",
                    filter.name(),
                    params,
                    titles.len(),
                    self.catalog.len()
                );
                Ok(titles)
            }
            Err(err) => {
                warn!("{} ({}) rejected: {}", filter.name(), params, err);
                Err(err)
            }
        }
    }

    /// Join titles with [`LINE_BREAK`].
    pub fn render(titles: &[MovieTitle]) -> String {
        titles.join(LINE_BREAK)
    }
}

impl Default for FilterMoviesService {
    fn default() -> Self {
        Self::new(Arc::new(Catalog::builtin()))
    }
}
