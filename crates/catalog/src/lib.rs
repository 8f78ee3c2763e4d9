//! # Catalog Crate
//!
//! This crate holds the movie titles every filter works on.
//!
//! ## Main Components
//!
//! - **types**: `MovieTitle` and the `Catalog` container
//! - **builtin**: the fixed default list of titles
//! - **normalize**: trimming, code-point lengths and word counting shared by the filters
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//!
//! let catalog = Catalog::builtin();
//! println!("{} titles, {} eligible", catalog.len(), catalog.eligible_count());
//! ```

// Public modules
pub mod builtin;
pub mod normalize;
pub mod types;

// Re-export commonly used types for convenience
pub use builtin::BUILTIN_TITLES;
pub use types::{Catalog, MovieTitle};
