//! Axum host for the two portals.
//!
//! The `admin` binary server-renders the admin console and injects the
//! ingestion backend origin. The `student` binary server-renders the student
//! portal, answers tutor chat at `/api/chat`, and serves the course catalog
//! under `/data`.

#![recursion_limit = "256"]

pub mod config;
pub mod routes;

use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
