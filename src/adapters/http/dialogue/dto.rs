//! HTTP DTOs for dialogue endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::adapters::presenter::OutboundMessage;
use crate::domain::dialogue::{DialogueEvent, DialogueState, Directive};
use crate::domain::foundation::{DomainError, UserId, ValidationError};
use crate::domain::review::ReviewerProfile;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// User fields supplied by the chat transport.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportUser {
    pub id: String,
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
}

impl TransportUser {
    pub fn user_id(&self) -> Result<UserId, ValidationError> {
        UserId::new(self.id.clone())
    }

    pub fn profile(&self) -> ReviewerProfile {
        ReviewerProfile::from_transport(
            &self.first_name,
            self.last_name.as_deref(),
            self.username.as_deref(),
        )
    }
}

/// Request carrying an already decoded event.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRequest {
    pub user: TransportUser,
    pub event: DialogueEvent,
}

/// Request carrying a raw chat message or inline keyboard callback.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRequest {
    pub user: TransportUser,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub callback_data: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Directives produced for a decoded event.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub state: DialogueState,
    pub directives: Vec<Directive>,
}

/// Rendered messages for a raw chat input.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub state: DialogueState,
    pub messages: Vec<OutboundMessage>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<DomainError> for ErrorResponse {
    fn from(err: DomainError) -> Self {
        let details = if err.details.is_empty() {
            None
        } else {
            serde_json::to_value(&err.details).ok()
        };
        Self {
            code: err.code.to_string(),
            message: err.message,
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn event_request_deserializes_tagged_event() {
        let req: EventRequest = serde_json::from_value(json!({
            "user": { "id": "42", "first_name": "Ada" },
            "event": { "type": "free_text", "text": "hello" }
        }))
        .unwrap();

        assert_eq!(
            req.event,
            DialogueEvent::FreeText {
                text: "hello".to_string()
            }
        );
        assert_eq!(req.user.profile().display_handle(), "No username");
    }

    #[test]
    fn transport_user_builds_profile() {
        let user: TransportUser = serde_json::from_value(json!({
            "id": "7",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "username": "ada"
        }))
        .unwrap();

        let profile = user.profile();
        assert_eq!(profile.display_name(), "Ada Lovelace");
        assert_eq!(profile.display_handle(), "@ada");
        assert_eq!(user.user_id().unwrap().as_str(), "7");
    }

    #[test]
    fn blank_user_id_is_rejected() {
        let user: TransportUser =
            serde_json::from_value(json!({ "id": " ", "first_name": "Ada" })).unwrap();
        assert!(user.user_id().is_err());
    }

    #[test]
    fn domain_error_becomes_error_response() {
        let response: ErrorResponse =
            DomainError::validation("callback_data", "Unknown callback data").into();
        assert_eq!(response.code, "VALIDATION_FAILED");
        assert_eq!(response.details, Some(json!({ "field": "callback_data" })));
    }

    #[test]
    fn error_response_skips_missing_details() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["code"], "BAD_REQUEST");
        assert!(json.get("details").is_none());
    }
}
