//! `GET /health`
//!
//! Answers from the process alone. A database outage shows up on the
//! appointment routes as 500s, not here.

use axum::{routing::get, Json, Router};
use serde::Serialize;

/// Body of a liveness reply
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Liveness {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

impl Liveness {
    fn up() -> Self {
        Self {
            status: "ok",
            service: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

async fn liveness() -> Json<Liveness> {
    Json(Liveness::up())
}

/// Liveness route; mounts on any router state.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(liveness))
}
