//! Route configuration for dialogue endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{health, post_event, post_message, DialogueAppState};

/// Creates the dialogue router.
///
/// Routes:
/// - `POST /api/dialogue/events` - Apply a tagged `DialogueEvent`
/// - `POST /api/dialogue/messages` - Apply raw text or callback data
/// - `GET /health` - Liveness probe
pub fn dialogue_router() -> Router<DialogueAppState> {
    Router::new()
        .route("/api/dialogue/events", post(post_event))
        .route("/api/dialogue/messages", post(post_message))
        .route("/health", get(health))
}
