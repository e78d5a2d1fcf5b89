//! HTTP adapters - REST API implementations.

pub mod dialogue;

use std::time::Duration;

use axum::Router;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

pub use dialogue::{dialogue_router, DialogueAppState};

/// Full application router with request tracing and a request timeout.
pub fn app_router(state: DialogueAppState, request_timeout: Duration) -> Router {
    dialogue_router()
        .with_state(state)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
