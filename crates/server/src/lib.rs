//! Server crate for the movie filter endpoints.
//!
//! This crate contains the service that binds the filters to the catalog and
//! the axum routes that expose it over HTTP.

pub mod routes;
pub mod service;

pub use routes::{ApiError, build_app, build_router, serve};
pub use service::{FilterMoviesService, LINE_BREAK};
