//! Core domain types for the movie catalog.
//!
//! A catalog is nothing more than an ordered list of titles. Titles are kept
//! exactly as given: surrounding whitespace, doubled spaces and blank entries
//! all survive, because the filters give each of them a meaning.

use serde::{Deserialize, Serialize};

use crate::builtin::BUILTIN_TITLES;
use crate::normalize::is_eligible;

/// A single movie title, stored verbatim.
pub type MovieTitle = String;

/// An ordered, immutable sequence of movie titles.
///
/// Duplicates and blank entries are allowed. Use [`Catalog::builtin`] for the
/// default list or [`Catalog::new`] to supply your own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    titles: Vec<MovieTitle>,
}

impl Catalog {
    /// Create a catalog from any list of titles, keeping their order.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MovieTitle>,
    {
        Self {
            titles: titles.into_iter().map(Into::into).collect(),
        }
    }

    /// The built-in catalog used when callers do not supply their own titles.
    pub fn builtin() -> Self {
        Self::new(BUILTIN_TITLES)
    }

    /// All titles in catalog order.
    pub fn titles(&self) -> &[MovieTitle] {
        &self.titles
    }

    /// Owned copy of the titles, for filters that consume their input.
    pub fn to_vec(&self) -> Vec<MovieTitle> {
        self.titles.clone()
    }

    /// Total number of entries, blank ones included.
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Titles that are not empty once trimmed, in catalog order.
    pub fn eligible(&self) -> impl Iterator<Item = &MovieTitle> {
        self.titles.iter().filter(|title| is_eligible(title))
    }

    pub fn eligible_count(&self) -> usize {
        self.eligible().count()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl From<Vec<MovieTitle>> for Catalog {
    fn from(titles: Vec<MovieTitle>) -> Self {
        Self { titles }
    }
}
