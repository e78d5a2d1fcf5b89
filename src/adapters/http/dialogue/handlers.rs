//! HTTP handlers for dialogue endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::presenter::TextPresenter;
use crate::application::handlers::dialogue::{DialogueCommand, HandleDialogueEventHandler};
use crate::domain::dialogue::DialogueEvent;
use crate::domain::foundation::DomainError;

use super::dto::{
    ErrorResponse, EventRequest, EventResponse, MessageRequest, MessageResponse, TransportUser,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct DialogueAppState {
    handler: Arc<HandleDialogueEventHandler>,
    presenter: TextPresenter,
}

impl DialogueAppState {
    pub fn new(handler: Arc<HandleDialogueEventHandler>, presenter: TextPresenter) -> Self {
        Self { handler, presenter }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/dialogue/events - Apply a decoded event
pub async fn post_event(
    State(state): State<DialogueAppState>,
    body: Result<Json<EventRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection),
    };
    let cmd = match command(&req.user, req.event) {
        Ok(cmd) => cmd,
        Err(response) => return response,
    };

    let outcome = state.handler.handle(cmd).await;
    let response = EventResponse {
        state: outcome.state,
        directives: outcome.directives,
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// POST /api/dialogue/messages - Apply a raw chat message or callback
pub async fn post_message(
    State(state): State<DialogueAppState>,
    body: Result<Json<MessageRequest>, JsonRejection>,
) -> Response {
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return bad_json(rejection),
    };

    let event = match (&req.text, &req.callback_data) {
        (Some(text), None) => state.presenter.parse_text(text),
        (None, Some(data)) => match state.presenter.parse_callback(data) {
            Some(event) => event,
            None => {
                return validation_failure(DomainError::validation(
                    "callback_data",
                    format!("Unknown callback data: {}", data),
                ))
            }
        },
        _ => {
            return validation_failure(DomainError::validation(
                "text",
                "Exactly one of text or callback_data is required",
            ))
        }
    };

    let cmd = match command(&req.user, event) {
        Ok(cmd) => cmd,
        Err(response) => return response,
    };

    let outcome = state.handler.handle(cmd).await;
    let response = MessageResponse {
        state: outcome.state,
        messages: state.presenter.render_all(&outcome.directives),
    };
    (StatusCode::OK, Json(response)).into_response()
}

/// GET /health - Liveness probe
pub async fn health() -> Response {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" }))).into_response()
}

// ════════════════════════════════════════════════════════════════════════════
// Helpers
// ════════════════════════════════════════════════════════════════════════════

fn command(user: &TransportUser, event: DialogueEvent) -> Result<DialogueCommand, Response> {
    let user_id = user
        .user_id()
        .map_err(|err| validation_failure(DomainError::from(err)))?;
    Ok(DialogueCommand {
        user_id,
        profile: user.profile(),
        event,
    })
}

fn validation_failure(err: DomainError) -> Response {
    (StatusCode::BAD_REQUEST, Json(ErrorResponse::from(err))).into_response()
}

fn bad_json(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection.body_text(), "Rejected request body");
    (
        StatusCode::BAD_REQUEST,
        Json(
            ErrorResponse::bad_request("Malformed request body")
                .with_details(serde_json::json!({ "reason": rejection.body_text() })),
        ),
    )
        .into_response()
}
