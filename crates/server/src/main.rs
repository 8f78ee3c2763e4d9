//! HTTP server exposing the movie filters over the built-in catalog.

use std::net::SocketAddr;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use server::{FilterMoviesService, serve};

/// Movie filter HTTP server
#[derive(Parser)]
#[command(name = "movie-filter-server")]
#[command(about = "Serve random, first-character and minimum-word movie filters over HTTP", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "MOVIE_FILTER_ADDR", default_value = "127.0.0.1:8000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("info,server=debug,filters=debug,tower_http=info")
            }),
        )
        .init();

    let args = Args::parse();

    let service = FilterMoviesService::default();
    info!(
        "Starting movie filter server with {} titles ({} eligible)",
        service.catalog().len(),
        service.catalog().eligible_count()
    );

    serve(args.addr, service).await
}
