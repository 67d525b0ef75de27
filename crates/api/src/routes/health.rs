//! Liveness endpoint. Always answers 200; a broken store shows up as
//! `"degraded"` in the body rather than as an error status.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthReport {
    fn from_probe(store_reachable: bool) -> Self {
        Self {
            status: if store_reachable { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy: store_reachable,
        }
    }
}

/// GET /health
async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let probe = state.store.ping().await;
    if let Err(err) = &probe {
        tracing::warn!(error = %err, "Store probe failed");
    }
    Json(HealthReport::from_probe(probe.is_ok()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
