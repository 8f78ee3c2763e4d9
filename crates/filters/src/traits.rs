//! Core trait for title filters.

use catalog::MovieTitle;

use crate::error::Result;

/// Common interface of the three title filters.
///
/// ## Design Note
/// - `Send + Sync` lets one filter value be shared between request handlers
/// - Filters take ownership of the titles and return the kept ones, so
///   surviving titles are moved rather than cloned
/// - Parameters are validated inside `apply`, before any title is examined
pub trait TitleFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to a list of titles.
    ///
    /// # Returns
    /// * `Ok(Vec<MovieTitle>)` - The kept titles
    /// * `Err` - If a parameter is invalid for this input
    fn apply(&self, titles: Vec<MovieTitle>) -> Result<Vec<MovieTitle>>;
}
