//! Outbound directives: what the presenter should show next.

use serde::Serialize;

use crate::domain::foundation::UserId;
use crate::domain::review::{Position, Submission};
use crate::domain::summary::ReviewSummary;

/// Reply keyboard a text message should carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
    /// Leave the current keyboard alone.
    None,
    /// "Write a review" / "Read reviews".
    MainMenu,
    /// Buttons 1 to 5.
    Rating,
}

/// One selectable line of the submission list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionListEntry {
    pub user_id: UserId,
    pub display_name: String,
    /// 1-based position within the reviewer's history.
    pub number: usize,
}

impl SubmissionListEntry {
    /// Button label, e.g. "Review 2 from Ada Lovelace".
    pub fn label(&self) -> String {
        format!("Review {} from {}", self.number, self.display_name)
    }
}

/// Everything needed to show one stored submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionDetail {
    pub user_id: UserId,
    pub display_name: String,
    pub display_handle: String,
    pub number: usize,
    pub submission: Submission,
}

/// Output of a dialogue step, consumed by the presenter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Directive {
    ShowMainMenu { text: String },
    ShowBrowseMenu { text: String },
    ShowRoleKeyboard { text: String, selected: Vec<Position> },
    Prompt { text: String },
    PromptRating { text: String },
    Error { text: String, keyboard: Keyboard },
    Confirmation { text: String, keyboard: Keyboard },
    SubmissionList { entries: Vec<SubmissionListEntry> },
    SubmissionDetail(SubmissionDetail),
    SummaryReport(ReviewSummary),
}

impl Directive {
    pub fn prompt(text: impl Into<String>) -> Self {
        Directive::Prompt { text: text.into() }
    }

    pub fn prompt_rating(text: impl Into<String>) -> Self {
        Directive::PromptRating { text: text.into() }
    }

    pub fn error(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Directive::Error {
            text: text.into(),
            keyboard,
        }
    }

    pub fn confirmation(text: impl Into<String>, keyboard: Keyboard) -> Self {
        Directive::Confirmation {
            text: text.into(),
            keyboard,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Directive::Error { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directives_serialize_with_type_tag() {
        let json = serde_json::to_value(Directive::error("Nope", Keyboard::Rating)).unwrap();
        assert_eq!(json["type"], "error");
        assert_eq!(json["keyboard"], "rating");
        assert_eq!(json["text"], "Nope");
    }

    #[test]
    fn role_keyboard_lists_selected_labels() {
        let directive = Directive::ShowRoleKeyboard {
            text: "pick".to_string(),
            selected: vec![Position::Designer],
        };
        let json = serde_json::to_value(directive).unwrap();
        assert_eq!(json["selected"], serde_json::json!(["Designer"]));
    }

    #[test]
    fn list_entry_label_matches_button_text() {
        let entry = SubmissionListEntry {
            user_id: UserId::new("1").unwrap(),
            display_name: "Ada Lovelace".to_string(),
            number: 2,
        };
        assert_eq!(entry.label(), "Review 2 from Ada Lovelace");
    }
}
