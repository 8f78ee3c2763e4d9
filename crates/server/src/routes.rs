//! HTTP routes for the movie filters.
//!
//! | route          | query          | body                          |
//! |----------------|----------------|-------------------------------|
//! | `/`            |                | empty                         |
//! | `/random`      | `count`        | sampled titles                |
//! | `/firstChar`   | `char`         | titles by leading character   |
//! | `/minimumWord` | `minimumCount` | titles by minimum word count  |
//!
//! Titles are joined with `</br>`. Rejected parameters answer `400` with the
//! error message as plain text.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::{Query, State},
    http::{Request, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use thiserror::Error;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use filters::{ErrorKind, FilterError};

use crate::service::FilterMoviesService;

pub const INDEX_PATH: &str = "/";
pub const RANDOM_PATH: &str = "/random";
pub const FIRST_CHAR_PATH: &str = "/firstChar";
pub const MINIMUM_WORD_PATH: &str = "/minimumWord";

#[derive(Debug, Default, Deserialize)]
pub struct RandomQuery {
    pub count: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
pub struct FirstCharQuery {
    #[serde(rename = "char")]
    pub needle: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumWordQuery {
    pub minimum_count: Option<i64>,
}

/// Failure of a route handler.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Filter(#[from] FilterError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Filter(err) => match err.kind() {
                ErrorKind::InvalidArgument | ErrorKind::NegativeValue => StatusCode::BAD_REQUEST,
                ErrorKind::Unsatisfiable => StatusCode::UNPROCESSABLE_ENTITY,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

async fn index() -> StatusCode {
    StatusCode::OK
}

async fn random(
    State(service): State<FilterMoviesService>,
    Query(query): Query<RandomQuery>,
) -> Result<Html<String>, ApiError> {
    let titles = service.random_titles(query.count)?;
    Ok(Html(FilterMoviesService::render(&titles)))
}

async fn first_char(
    State(service): State<FilterMoviesService>,
    Query(query): Query<FirstCharQuery>,
) -> Result<Html<String>, ApiError> {
    let titles = service.titles_by_leading_char(query.needle.as_deref())?;
    Ok(Html(FilterMoviesService::render(&titles)))
}

async fn minimum_word(
    State(service): State<FilterMoviesService>,
    Query(query): Query<MinimumWordQuery>,
) -> Result<Html<String>, ApiError> {
    let titles = service.titles_by_minimum_words(query.minimum_count)?;
    Ok(Html(FilterMoviesService::render(&titles)))
}

/// Router with the four routes, without any middleware.
pub fn build_router(service: FilterMoviesService) -> Router {
    Router::new()
        .route(INDEX_PATH, get(index))
        .route(RANDOM_PATH, get(random))
        .route(FIRST_CHAR_PATH, get(first_char))
        .route(MINIMUM_WORD_PATH, get(minimum_word))
        .with_state(service)
}

/// [`build_router`] wrapped in a request tracing layer.
pub fn build_app(service: FilterMoviesService) -> Router {
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri()
            )
        })
        .on_response(|response: &Response, latency: Duration, span: &tracing::Span| {
            let status = response.status().as_u16();
            let latency_ms = latency.as_millis().min(u128::from(u64::MAX)) as u64;
            tracing::info!(parent: span, status, latency_ms, "request completed");
        });

    build_router(service).layer(trace_layer)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, service: FilterMoviesService) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, build_app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(err) => {
            warn!("Failed to listen for Ctrl-C: {}", err);
            std::future::pending::<()>().await;
        }
    }
}
