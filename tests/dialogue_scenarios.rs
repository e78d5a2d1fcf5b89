//! End-to-end dialogue scenarios.
//!
//! Drives the event handler with real adapters and checks what reaches the
//! submission store and what the user is shown.

use std::sync::Arc;

use proptest::prelude::*;
use tempfile::TempDir;

use review_bot::adapters::presenter::TextPresenter;
use review_bot::adapters::session::InMemorySessionStore;
use review_bot::adapters::storage::{InMemorySubmissionStore, JsonSubmissionStore};
use review_bot::application::{DialogueCommand, DialogueOutcome, HandleDialogueEventHandler};
use review_bot::domain::dialogue::{
    DialogueEvent, DialogueState, Directive, Keyboard, EMPTY_SELECTION, INVALID_RATING,
    INTERACTION_PROMPT, REVIEW_SAVED, RETURNED_TO_MENU,
};
use review_bot::domain::foundation::UserId;
use review_bot::domain::review::{Criterion, Position, ReviewerProfile};
use review_bot::domain::summary::Average;
use review_bot::ports::{SessionStore, SubmissionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

struct Harness {
    handler: HandleDialogueEventHandler,
    sessions: Arc<InMemorySessionStore>,
    submissions: Arc<dyn SubmissionStore>,
}

impl Harness {
    fn in_memory() -> Self {
        Self::with_store(Arc::new(InMemorySubmissionStore::new()))
    }

    fn with_store(submissions: Arc<dyn SubmissionStore>) -> Self {
        let sessions = Arc::new(InMemorySessionStore::new());
        let handler = HandleDialogueEventHandler::new(sessions.clone(), submissions.clone());
        Self {
            handler,
            sessions,
            submissions,
        }
    }

    async fn send_as(&self, user: &str, event: DialogueEvent) -> DialogueOutcome {
        self.handler
            .handle(DialogueCommand {
                user_id: UserId::new(user).unwrap(),
                profile: ReviewerProfile::from_transport("Ada", Some("Lovelace"), Some("ada")),
                event,
            })
            .await
    }

    async fn send(&self, event: DialogueEvent) -> DialogueOutcome {
        self.send_as("1001", event).await
    }

    async fn send_all(&self, events: Vec<DialogueEvent>) -> Option<DialogueOutcome> {
        let mut last = None;
        for event in events {
            last = Some(self.send(event).await);
        }
        last
    }
}

fn free(text: &str) -> DialogueEvent {
    DialogueEvent::FreeText {
        text: text.to_string(),
    }
}

fn rating(text: &str) -> DialogueEvent {
    DialogueEvent::RatingText {
        text: text.to_string(),
    }
}

fn happy_path() -> Vec<DialogueEvent> {
    let mut events = vec![
        DialogueEvent::StartSubmission,
        DialogueEvent::ToggleRole {
            role: Position::Designer,
        },
        DialogueEvent::RoleSelectionDone,
        free("Learned Figma"),
        rating("4"),
        rating("5"),
    ];
    events.extend((0..5).map(|_| rating("3")));
    events.push(free("Grew confidence"));
    events.push(rating("5"));
    events
}

// =============================================================================
// Scenarios
// =============================================================================

#[tokio::test]
async fn happy_path_persists_one_submission_to_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("messages.json");
    let store = Arc::new(JsonSubmissionStore::init(&path).await.unwrap());
    let harness = Harness::with_store(store);

    let outcome = harness.send_all(happy_path()).await.unwrap();

    assert_eq!(outcome.state, DialogueState::Idle);
    assert_eq!(
        outcome.directives,
        vec![Directive::confirmation(REVIEW_SAVED, Keyboard::MainMenu)]
    );

    let reopened = JsonSubmissionStore::new(&path);
    let records = reopened.load().await;
    let record = records.get(&UserId::new("1001").unwrap()).unwrap();
    assert_eq!(record.name, "Ada Lovelace");
    assert_eq!(record.nickname, "@ada");
    assert_eq!(record.reviews.len(), 1);

    let submission = &record.reviews[0];
    assert_eq!(submission.positions(), &[Position::Designer]);
    assert_eq!(submission.satisfaction_rating().value(), 4);
    assert_eq!(submission.interaction_process_rating().value(), 5);
    assert!(Criterion::ALL
        .iter()
        .all(|c| submission.criterion_rating(*c).map(|r| r.value()) == Some(3)));
    assert_eq!(submission.overall_satisfaction().value(), 5);
}

#[tokio::test]
async fn invalid_rating_is_retried_without_losing_answers() {
    let harness = Harness::in_memory();
    let mut events = happy_path();
    events.truncate(4);
    harness.send_all(events).await;
    let before = harness.sessions.get(&UserId::new("1001").unwrap()).await;

    let rejected = harness.send(rating("7")).await;

    assert_eq!(rejected.state, DialogueState::AwaitingSatisfactionRating);
    assert_eq!(
        rejected.directives,
        vec![Directive::error(INVALID_RATING, Keyboard::Rating)]
    );
    let after = harness.sessions.get(&UserId::new("1001").unwrap()).await;
    assert_eq!(before, after);

    let accepted = harness.send(rating("3")).await;
    assert_eq!(accepted.state, DialogueState::AwaitingInteractionProcessRating);
    assert_eq!(
        accepted.directives,
        vec![Directive::prompt_rating(INTERACTION_PROMPT)]
    );
}

#[tokio::test]
async fn empty_selection_is_rejected() {
    let harness = Harness::in_memory();
    harness.send(DialogueEvent::StartSubmission).await;

    let outcome = harness.send(DialogueEvent::RoleSelectionDone).await;

    assert_eq!(outcome.state, DialogueState::AwaitingPositionSelection);
    assert_eq!(
        outcome.directives,
        vec![Directive::error(EMPTY_SELECTION, Keyboard::None)]
    );
}

#[tokio::test]
async fn summary_of_empty_store_has_no_data() {
    let harness = Harness::in_memory();

    let outcome = harness.send(DialogueEvent::BrowseSummary).await;

    let [Directive::SummaryReport(summary)] = outcome.directives.as_slice() else {
        panic!("expected one summary, got {:?}", outcome.directives);
    };
    assert_eq!(summary.submission_count, 0);
    assert_eq!(summary.satisfaction, Average::NoData);
    assert_eq!(summary.interaction_process, Average::NoData);
    assert_eq!(summary.criteria.len(), 5);
    assert!(summary.criteria.iter().all(|c| c.average == Average::NoData));
}

#[tokio::test]
async fn return_to_menu_abandons_the_questionnaire() {
    let harness = Harness::in_memory();
    let mut events = happy_path();
    events.truncate(9);
    harness.send_all(events).await;

    let outcome = harness.send(DialogueEvent::ReturnToMenu).await;

    assert_eq!(outcome.state, DialogueState::Idle);
    assert_eq!(
        outcome.directives,
        vec![Directive::confirmation(RETURNED_TO_MENU, Keyboard::MainMenu)]
    );
    assert!(harness.submissions.load().await.is_empty());
    assert_eq!(harness.sessions.active_count().await, 0);
}

#[tokio::test]
async fn users_progress_independently() {
    let harness = Harness::in_memory();

    harness.send_as("1", DialogueEvent::StartSubmission).await;
    harness
        .send_as(
            "1",
            DialogueEvent::ToggleRole {
                role: Position::Marketer,
            },
        )
        .await;
    let other = harness.send_as("2", DialogueEvent::RoleSelectionDone).await;

    assert_eq!(other.state, DialogueState::Idle);
    assert!(other.directives.is_empty());
    let first = harness.sessions.get(&UserId::new("1").unwrap()).await;
    assert_eq!(first.accumulator().draft().positions(), &[Position::Marketer]);
}

#[tokio::test]
async fn stored_reviews_can_be_listed_and_opened_by_label() {
    let harness = Harness::in_memory();
    harness.send_all(happy_path()).await;
    harness.send_all(happy_path()).await;
    let presenter = TextPresenter::new();

    let listed = harness
        .send(presenter.parse_text("View reviews"))
        .await;
    let rendered = presenter.render_all(&listed.directives);
    assert_eq!(rendered[0].text, "Select a review to read:");

    let opened = harness
        .send(presenter.parse_text("Review 2 from Ada Lovelace"))
        .await;
    let text = &presenter.render_all(&opened.directives)[0].text;
    assert!(text.starts_with("Review 2 from Ada Lovelace @ada:"));
    assert!(text.contains("Positions: Designer"));

    let missing = harness
        .send(presenter.parse_text("Review 3 from Ada Lovelace"))
        .await;
    assert_eq!(presenter.render_all(&missing.directives)[0].text, "Review not found.");
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn unfinished_dialogues_never_reach_the_store(steps in 0usize..13, menu_first in any::<bool>()) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let harness = Harness::in_memory();
            let mut events = happy_path();
            events.truncate(steps);
            if menu_first {
                events.push(DialogueEvent::ReturnToMenu);
            }

            harness.send_all(events).await;

            prop_assert!(harness.submissions.load().await.is_empty());
            Ok(())
        })?;
    }
}
