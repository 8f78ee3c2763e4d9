//! Error types for the filters crate.
//!
//! Every variant is raised before any filtering happens, so a failed call
//! never produces a partial result.

use thiserror::Error;

/// Broad category of a [`FilterError`], used by callers that only care
/// whether the request was malformed or merely unsatisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter is out of range or has the wrong shape.
    InvalidArgument,
    /// A minimum word count was negative.
    NegativeValue,
    /// The parameters were valid but the input cannot satisfy them.
    Unsatisfiable,
}

/// Errors raised by the title filters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Sample size was zero or negative
    #[error("minimum count is 1")]
    CountBelowMinimum { requested: i64 },

    /// Sample size is larger than the whole input list
    ///
    /// The bound is the full input length, blank entries included.
    #[error("count exceeds number of available movies")]
    CountExceedsAvailable { requested: i64, available: usize },

    /// The leading-character filter received zero or several code points
    #[error("exactly one character required")]
    NotSingleCharacter { found: usize },

    /// Minimum word count below zero
    #[error("minimum count must be 0 or greater")]
    NegativeMinimum { requested: i64 },

    /// Fewer eligible titles than requested, although the list itself was long enough
    #[error("not enough eligible movies to draw {requested} (found {eligible})")]
    InsufficientEligible { requested: usize, eligible: usize },
}

impl FilterError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FilterError::CountBelowMinimum { .. }
            | FilterError::CountExceedsAvailable { .. }
            | FilterError::NotSingleCharacter { .. } => ErrorKind::InvalidArgument,
            FilterError::NegativeMinimum { .. } => ErrorKind::NegativeValue,
            FilterError::InsufficientEligible { .. } => ErrorKind::Unsatisfiable,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, FilterError>;
