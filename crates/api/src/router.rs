//! Shared application router builder.
//!
//! [`build_app_router`] is used by both the binary (`main.rs`) and the
//! integration tests so they run the same middleware stack.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderName;
use axum::Router;
use inventory_db::DeadlineStore;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Set request ID on incoming requests
/// 2. Request/response tracing
/// 3. Propagate request ID to response
/// 4. Panic recovery (500)
///
/// The store in `state` is wrapped in a [`DeadlineStore`], so a store call
/// that outlives `request_timeout` fails as a storage error (500 with the
/// JSON error body) rather than being cut off by the transport.
pub fn build_app_router(state: AppState, request_timeout: Duration) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");
    let state = AppState::new(Arc::new(DeadlineStore::new(state.store, request_timeout)));

    Router::new()
        .merge(routes::health::router())
        .merge(routes::product::router())
        .layer(CatchPanicLayer::new())
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .with_state(state)
}
