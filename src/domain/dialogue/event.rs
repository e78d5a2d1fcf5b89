//! Inbound events: the input alphabet of the dialogue.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::UserId;
use crate::domain::review::Position;

/// A single user action, already decoded by the presenter.
///
/// Raw user text only travels inside `FreeText` and `RatingText`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DialogueEvent {
    /// Conversation opened (`/start`); shows the main menu.
    Greet,

    /// "Write a review".
    StartSubmission,

    /// Position button pressed during selection.
    ToggleRole { role: Position },

    /// "Done" pressed during selection.
    RoleSelectionDone,

    /// Free-form answer text.
    FreeText { text: String },

    /// Answer text the presenter expects to be a rating; validated by the dialogue.
    RatingText { text: String },

    /// "Back to main menu"; wins over every state-specific rule.
    ReturnToMenu,

    /// "Read reviews".
    OpenBrowseMenu,

    /// "View reviews".
    BrowseSubmissions,

    /// "View overall summary".
    BrowseSummary,

    /// "Review N from NAME". `user_id`, when present, disambiguates the name.
    SelectSubmission {
        display_name: String,
        number: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        user_id: Option<UserId>,
    },
}

impl DialogueEvent {
    /// Short name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DialogueEvent::Greet => "greet",
            DialogueEvent::StartSubmission => "start_submission",
            DialogueEvent::ToggleRole { .. } => "toggle_role",
            DialogueEvent::RoleSelectionDone => "role_selection_done",
            DialogueEvent::FreeText { .. } => "free_text",
            DialogueEvent::RatingText { .. } => "rating_text",
            DialogueEvent::ReturnToMenu => "return_to_menu",
            DialogueEvent::OpenBrowseMenu => "open_browse_menu",
            DialogueEvent::BrowseSubmissions => "browse_submissions",
            DialogueEvent::BrowseSummary => "browse_summary",
            DialogueEvent::SelectSubmission { .. } => "select_submission",
        }
    }
}
