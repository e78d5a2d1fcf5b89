//! Plain-text dialogue presenter.
//!
//! Maps chat-style inputs (button labels, slash commands, inline callback
//! data) onto dialogue events, and renders directives as text messages with
//! keyboard markup.

use serde::Serialize;

use crate::domain::dialogue::{DialogueEvent, Directive, Keyboard, SubmissionDetail};
use crate::domain::review::{Position, Submission};
use crate::domain::summary::ReviewSummary;

pub const START_COMMAND: &str = "/start";
pub const WRITE_REVIEW: &str = "Write a review";
pub const READ_REVIEWS: &str = "Read reviews";
pub const VIEW_REVIEWS: &str = "View reviews";
pub const VIEW_SUMMARY: &str = "View overall summary";
pub const BACK_TO_MENU: &str = "Back to main menu";
pub const DONE: &str = "Done";

pub const TOGGLE_POSITION_PREFIX: &str = "toggle_position_";
pub const POSITIONS_DONE: &str = "positions_done";

const SELECTED_MARK: &str = "\u{2705}";
const NO_REVIEWS: &str = "No reviews available.";
const SELECT_REVIEW: &str = "Select a review to read:";

/// Button of an inline keyboard attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineButton {
    pub label: String,
    pub callback_data: String,
}

/// Keyboard attached to an outbound message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KeyboardMarkup {
    /// Buttons that send their label as a text message.
    Reply { rows: Vec<Vec<String>> },
    /// Buttons that send callback data.
    Inline { rows: Vec<Vec<InlineButton>> },
}

/// One message to send to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub text: String,
    /// `None` leaves the user's current keyboard in place.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyboard: Option<KeyboardMarkup>,
}

/// Presenter for text chat transports.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// Interprets a typed or button-sent message.
    ///
    /// Anything that is not a known command or button label is an answer.
    pub fn parse_text(&self, text: &str) -> DialogueEvent {
        let trimmed = text.trim();
        match trimmed {
            START_COMMAND => DialogueEvent::Greet,
            WRITE_REVIEW => DialogueEvent::StartSubmission,
            READ_REVIEWS => DialogueEvent::OpenBrowseMenu,
            VIEW_REVIEWS => DialogueEvent::BrowseSubmissions,
            VIEW_SUMMARY => DialogueEvent::BrowseSummary,
            BACK_TO_MENU => DialogueEvent::ReturnToMenu,
            _ => parse_review_label(trimmed).unwrap_or_else(|| DialogueEvent::FreeText {
                text: text.to_string(),
            }),
        }
    }

    /// Interprets inline keyboard callback data; `None` for unknown data.
    pub fn parse_callback(&self, data: &str) -> Option<DialogueEvent> {
        if data == POSITIONS_DONE {
            return Some(DialogueEvent::RoleSelectionDone);
        }
        let label = data.strip_prefix(TOGGLE_POSITION_PREFIX)?;
        let role = label.parse::<Position>().ok()?;
        Some(DialogueEvent::ToggleRole { role })
    }

    pub fn render(&self, directive: &Directive) -> OutboundMessage {
        match directive {
            Directive::ShowMainMenu { text } => message(text, Some(main_menu())),
            Directive::ShowBrowseMenu { text } => message(text, Some(browse_menu())),
            Directive::ShowRoleKeyboard { text, selected } => {
                message(text, Some(role_keyboard(selected)))
            }
            Directive::Prompt { text } => message(text, None),
            Directive::PromptRating { text } => message(text, Some(rating_keyboard())),
            Directive::Error { text, keyboard } | Directive::Confirmation { text, keyboard } => {
                message(text, markup_for(*keyboard))
            }
            Directive::SubmissionList { entries } if entries.is_empty() => {
                message(NO_REVIEWS, Some(main_menu()))
            }
            Directive::SubmissionList { entries } => {
                let labels: Vec<String> = entries.iter().map(|entry| entry.label()).collect();
                let mut rows: Vec<Vec<String>> =
                    labels.chunks(2).map(|pair| pair.to_vec()).collect();
                rows.push(vec![BACK_TO_MENU.to_string()]);
                message(SELECT_REVIEW, Some(KeyboardMarkup::Reply { rows }))
            }
            Directive::SubmissionDetail(detail) => {
                message(&render_detail(detail), Some(main_menu()))
            }
            Directive::SummaryReport(summary) => {
                message(&render_summary(summary), Some(main_menu()))
            }
        }
    }

    pub fn render_all(&self, directives: &[Directive]) -> Vec<OutboundMessage> {
        directives.iter().map(|d| self.render(d)).collect()
    }
}

/// "Review N from NAME", N being a positive integer.
fn parse_review_label(text: &str) -> Option<DialogueEvent> {
    let rest = text.strip_prefix("Review ")?;
    let (number, display_name) = rest.split_once(" from ")?;
    let number = number.parse::<usize>().ok().filter(|n| *n > 0)?;
    if display_name.is_empty() {
        return None;
    }
    Some(DialogueEvent::SelectSubmission {
        display_name: display_name.to_string(),
        number,
        user_id: None,
    })
}

fn message(text: &str, keyboard: Option<KeyboardMarkup>) -> OutboundMessage {
    OutboundMessage {
        text: text.to_string(),
        keyboard,
    }
}

fn markup_for(keyboard: Keyboard) -> Option<KeyboardMarkup> {
    match keyboard {
        Keyboard::None => None,
        Keyboard::MainMenu => Some(main_menu()),
        Keyboard::Rating => Some(rating_keyboard()),
    }
}

fn main_menu() -> KeyboardMarkup {
    KeyboardMarkup::Reply {
        rows: vec![vec![WRITE_REVIEW.to_string(), READ_REVIEWS.to_string()]],
    }
}

fn browse_menu() -> KeyboardMarkup {
    KeyboardMarkup::Reply {
        rows: [VIEW_REVIEWS, VIEW_SUMMARY, BACK_TO_MENU]
            .iter()
            .map(|label| vec![label.to_string()])
            .collect(),
    }
}

fn rating_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::Reply {
        rows: vec![(1..=5).map(|n| n.to_string()).collect()],
    }
}

fn role_keyboard(selected: &[Position]) -> KeyboardMarkup {
    let mut rows: Vec<Vec<InlineButton>> = Position::ALL
        .iter()
        .map(|position| {
            let label = if selected.contains(position) {
                format!("{} {}", SELECTED_MARK, position)
            } else {
                position.to_string()
            };
            vec![InlineButton {
                label,
                callback_data: format!("{}{}", TOGGLE_POSITION_PREFIX, position),
            }]
        })
        .collect();
    rows.push(vec![InlineButton {
        label: DONE.to_string(),
        callback_data: POSITIONS_DONE.to_string(),
    }]);
    KeyboardMarkup::Inline { rows }
}

fn render_detail(detail: &SubmissionDetail) -> String {
    let submission: &Submission = &detail.submission;
    let positions = submission
        .positions()
        .iter()
        .map(|p| p.label())
        .collect::<Vec<_>>()
        .join(", ");
    let ratings = submission
        .multiple_ratings()
        .iter()
        .map(|(criterion, rating)| format!("{}: {}/5", criterion, rating))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Review {} from {} {}:\n\
         Positions: {}\n\
         2. Experience Description:\n{}\n\
         3. Satisfaction with Experience: {}/5\n\
         4. Team Interaction Processes: {}/5\n\
         5. Additional Ratings:\n{}\n\
         6. Professional Development Effect:\n{}\n\
         7. Overall Satisfaction: {}/5",
        detail.number,
        detail.display_name,
        detail.display_handle,
        positions,
        submission.experience_description(),
        submission.satisfaction_rating(),
        submission.interaction_process_rating(),
        ratings,
        submission.professional_development_effect(),
        submission.overall_satisfaction(),
    )
}

fn render_summary(summary: &ReviewSummary) -> String {
    let mut out = String::from("Overall Summary:\n");

    match summary.satisfaction.value() {
        Some(_) => out.push_str(&format!(
            "Average Satisfaction with Experience: {}\n",
            summary.satisfaction
        )),
        None => out.push_str("No data for Satisfaction with Experience\n"),
    }
    match summary.interaction_process.value() {
        Some(_) => out.push_str(&format!(
            "Average Team Interaction Processes: {}\n",
            summary.interaction_process
        )),
        None => out.push_str("No data for Team Interaction Processes\n"),
    }

    out.push_str("Average Ratings for Additional Criteria:\n");
    for entry in &summary.criteria {
        out.push_str(&format!("{}: {}\n", entry.criterion, entry.average));
    }
    out
}
