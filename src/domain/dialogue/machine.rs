//! Review dialogue transition function.
//!
//! Pure: given a session and one event, computes the next session, the
//! directives to show and, on completion, the submission to persist. Nothing
//! is mutated in place, so a caller can drop the result to reject a step.

use super::{Directive, DialogueEvent, DialogueState, Keyboard, UserSession};
use crate::domain::foundation::{Rating, StateMachine, UserId};
use crate::domain::review::{Criterion, Position, ReviewerProfile, Submission};

pub const POSITION_PROMPT: &str =
    "1. Please select the position(s) you interned for. You can select multiple positions.";
pub const EXPERIENCE_PROMPT: &str =
    "2. Describe the experience you gained in terms of tasks and skill development.";
pub const SATISFACTION_PROMPT: &str = "3. How satisfied are you with the experience gained? Rate on a scale of 1-5 (where 1 - not satisfied at all, there was nothing useful, 5 - the experience I received completely met or exceeded my expectations).";
pub const INTERACTION_PROMPT: &str = "4. How well are the interaction processes built in the team? Rate on a scale of 1-5 (where 1 is very bad, nothing clear, 5 is very good and clear).";
pub const CRITERIA_INTRO: &str =
    "5. Rate the following on a scale of 1-5 (where 1 is all very bad, 5 is very good).";
pub const DEVELOPMENT_PROMPT: &str =
    "6. What effect did the internship have on your professional development?";
pub const OVERALL_PROMPT: &str = "7. Overall satisfaction with the internship on a scale of 1-5 (where 1- not satisfied at all, 5 - fully satisfied).";

pub const INVALID_RATING: &str = "Please enter a valid rating between 1 and 5.";
pub const EMPTY_SELECTION: &str = "Please select at least one position before proceeding.";
pub const SELECTION_PENDING: &str =
    "Please use the buttons to select your position(s), then press Done.";
pub const EMPTY_ANSWER: &str = "Please type your answer as a message.";
pub const USE_THE_MENU: &str = "Please use the buttons to interact with the bot.";
pub const RETURNED_TO_MENU: &str = "Returned to the main menu.";
pub const REVIEW_SAVED: &str = "Your review has been saved! Thank you for your feedback.";
pub const BROWSE_MENU: &str = "Please choose an option:";

/// Read-only request answered from the record-set; never touches the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseQuery {
    Submissions,
    Summary,
    Select {
        display_name: String,
        number: usize,
        user_id: Option<UserId>,
    },
}

/// Result of applying one event to a session.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub session: UserSession,
    pub directives: Vec<Directive>,
    /// Set only by the final valid rating; must be persisted before `session` is kept.
    pub completed: Option<Submission>,
}

/// What the caller has to do with an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Transition(Transition),
    Query(BrowseQuery),
}

/// The review questionnaire.
pub struct ReviewDialogue;

impl ReviewDialogue {
    /// Applies `event` to a copy of `session`.
    pub fn step(session: &UserSession, event: DialogueEvent, profile: &ReviewerProfile) -> Step {
        let mut next = session.clone();
        let mut completed = None;

        let directives = match event {
            DialogueEvent::ReturnToMenu => {
                next.reset();
                vec![Directive::confirmation(RETURNED_TO_MENU, Keyboard::MainMenu)]
            }
            DialogueEvent::Greet => vec![Directive::ShowMainMenu {
                text: greeting(profile),
            }],
            DialogueEvent::StartSubmission => {
                next.restart();
                vec![role_keyboard(&next)]
            }
            DialogueEvent::OpenBrowseMenu => {
                next.reset();
                vec![Directive::ShowBrowseMenu {
                    text: BROWSE_MENU.to_string(),
                }]
            }
            DialogueEvent::BrowseSubmissions => return Step::Query(BrowseQuery::Submissions),
            DialogueEvent::BrowseSummary => return Step::Query(BrowseQuery::Summary),
            DialogueEvent::SelectSubmission {
                display_name,
                number,
                user_id,
            } => {
                return Step::Query(BrowseQuery::Select {
                    display_name,
                    number,
                    user_id,
                })
            }
            DialogueEvent::ToggleRole { role } => toggle_role(&mut next, role),
            DialogueEvent::RoleSelectionDone => finish_selection(&mut next),
            DialogueEvent::FreeText { text } | DialogueEvent::RatingText { text } => {
                answer(&mut next, text.trim(), &mut completed)
            }
        };

        Step::Transition(Transition {
            session: next,
            directives,
            completed,
        })
    }
}

fn greeting(profile: &ReviewerProfile) -> String {
    format!(
        "Hello {}!\nThis is an employee review bot. Please choose an option:",
        profile.display_name()
    )
}

fn role_keyboard(session: &UserSession) -> Directive {
    Directive::ShowRoleKeyboard {
        text: POSITION_PROMPT.to_string(),
        selected: session.accumulator().draft().positions().to_vec(),
    }
}

fn criterion_prompt(criterion: Criterion) -> String {
    format!("{}:", criterion.label())
}

fn advance(session: &mut UserSession, target: DialogueState) {
    debug_assert!(
        session.state().can_transition_to(&target),
        "illegal move {:?} -> {:?}",
        session.state(),
        target
    );
    session.set_state(target);
}

// Position buttons are only live during selection; presses on a stale
// keyboard are swallowed.
fn toggle_role(session: &mut UserSession, role: Position) -> Vec<Directive> {
    if session.state() != DialogueState::AwaitingPositionSelection {
        return Vec::new();
    }
    session.accumulator_mut().draft.toggle_position(role);
    vec![role_keyboard(session)]
}

fn finish_selection(session: &mut UserSession) -> Vec<Directive> {
    if session.state() != DialogueState::AwaitingPositionSelection {
        return Vec::new();
    }
    let positions = session.accumulator().draft().positions();
    if positions.is_empty() {
        return vec![Directive::error(EMPTY_SELECTION, Keyboard::None)];
    }
    let selected = positions
        .iter()
        .map(Position::label)
        .collect::<Vec<_>>()
        .join(", ");
    advance(session, DialogueState::AwaitingExperienceDescription);
    vec![
        Directive::confirmation(format!("You have selected: {}", selected), Keyboard::None),
        Directive::prompt(EXPERIENCE_PROMPT),
    ]
}

fn answer(
    session: &mut UserSession,
    text: &str,
    completed: &mut Option<Submission>,
) -> Vec<Directive> {
    let state = session.state();

    if state.expects_rating() {
        let rating = match Rating::parse(text) {
            Ok(rating) => rating,
            Err(_) => return vec![Directive::error(INVALID_RATING, Keyboard::Rating)],
        };
        return record_rating(session, rating, completed);
    }

    match state {
        DialogueState::Idle => {
            session.reset();
            vec![Directive::error(USE_THE_MENU, Keyboard::MainMenu)]
        }
        DialogueState::AwaitingPositionSelection => {
            vec![Directive::error(SELECTION_PENDING, Keyboard::None)]
        }
        _ if text.is_empty() => vec![Directive::error(EMPTY_ANSWER, Keyboard::None)],
        DialogueState::AwaitingExperienceDescription => {
            session.accumulator_mut().draft.set_experience_description(text);
            advance(session, DialogueState::AwaitingSatisfactionRating);
            vec![Directive::prompt_rating(SATISFACTION_PROMPT)]
        }
        DialogueState::AwaitingProfessionalDevelopmentEffect => {
            session
                .accumulator_mut()
                .draft
                .set_professional_development_effect(text);
            advance(session, DialogueState::AwaitingOverallSatisfactionRating);
            vec![Directive::prompt_rating(OVERALL_PROMPT)]
        }
        // Rating states are handled above.
        _ => vec![Directive::error(INVALID_RATING, Keyboard::Rating)],
    }
}

fn record_rating(
    session: &mut UserSession,
    rating: Rating,
    completed: &mut Option<Submission>,
) -> Vec<Directive> {
    match session.state() {
        DialogueState::AwaitingSatisfactionRating => {
            session.accumulator_mut().draft.set_satisfaction_rating(rating);
            advance(session, DialogueState::AwaitingInteractionProcessRating);
            vec![Directive::prompt_rating(INTERACTION_PROMPT)]
        }
        DialogueState::AwaitingInteractionProcessRating => {
            session
                .accumulator_mut()
                .draft
                .set_interaction_process_rating(rating);
            session.accumulator_mut().begin_criteria();
            advance(session, DialogueState::AwaitingMultipleRatings);
            vec![Directive::prompt_rating(format!(
                "{}\n\n{}",
                CRITERIA_INTRO,
                criterion_prompt(Criterion::ALL[0])
            ))]
        }
        DialogueState::AwaitingMultipleRatings => {
            if !session.accumulator_mut().record_criterion(rating) {
                return session
                    .accumulator()
                    .current_criterion()
                    .map(|c| vec![Directive::prompt_rating(criterion_prompt(c))])
                    .unwrap_or_default();
            }
            advance(session, DialogueState::AwaitingProfessionalDevelopmentEffect);
            vec![Directive::prompt(DEVELOPMENT_PROMPT)]
        }
        DialogueState::AwaitingOverallSatisfactionRating => {
            session.accumulator_mut().draft.set_overall_satisfaction(rating);
            let draft = session.accumulator().draft().clone();
            session.reset();
            match draft.finish() {
                Ok(submission) => {
                    *completed = Some(submission);
                    vec![Directive::confirmation(REVIEW_SAVED, Keyboard::MainMenu)]
                }
                Err(err) => vec![Directive::error(
                    format!("Your review was incomplete and has been discarded ({}).", err),
                    Keyboard::MainMenu,
                )],
            }
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::Accumulator;
    use proptest::prelude::*;

    fn profile() -> ReviewerProfile {
        ReviewerProfile::new("Ada Lovelace", "@ada")
    }

    fn apply(session: &UserSession, event: DialogueEvent) -> Transition {
        match ReviewDialogue::step(session, event, &profile()) {
            Step::Transition(t) => t,
            Step::Query(q) => panic!("unexpected query {:?}", q),
        }
    }

    fn text(s: &str) -> DialogueEvent {
        DialogueEvent::FreeText { text: s.to_string() }
    }

    fn rating(s: &str) -> DialogueEvent {
        DialogueEvent::RatingText { text: s.to_string() }
    }

    /// Drives a fresh session through `events`, returning the last transition.
    fn run(events: Vec<DialogueEvent>) -> Transition {
        let mut session = UserSession::new();
        let mut last = None;
        for event in events {
            let t = apply(&session, event);
            session = t.session.clone();
            last = Some(t);
        }
        last.unwrap()
    }

    fn happy_path() -> Vec<DialogueEvent> {
        let mut events = vec![
            DialogueEvent::StartSubmission,
            DialogueEvent::ToggleRole {
                role: Position::Designer,
            },
            DialogueEvent::RoleSelectionDone,
            text("Learned Figma"),
            rating("4"),
            rating("5"),
        ];
        events.extend((0..5).map(|_| rating("3")));
        events.push(text("Grew confidence"));
        events.push(rating("5"));
        events
    }

    #[test]
    fn happy_path_completes_submission_and_returns_to_idle() {
        let t = run(happy_path());
        let submission = t.completed.expect("submission");
        assert_eq!(submission.positions(), &[Position::Designer]);
        assert_eq!(submission.satisfaction_rating().value(), 4);
        assert_eq!(submission.interaction_process_rating().value(), 5);
        assert_eq!(submission.multiple_ratings().len(), 5);
        assert!(submission.multiple_ratings().values().all(|r| r.value() == 3));
        assert_eq!(submission.experience_description(), "Learned Figma");
        assert_eq!(submission.professional_development_effect(), "Grew confidence");
        assert_eq!(submission.overall_satisfaction().value(), 5);
        assert!(t.session.is_idle());
        assert!(t.session.accumulator().is_empty());
        assert_eq!(
            t.directives,
            vec![Directive::confirmation(REVIEW_SAVED, Keyboard::MainMenu)]
        );
    }

    #[test]
    fn only_final_rating_produces_a_submission() {
        let events = happy_path();
        let mut session = UserSession::new();
        for (i, event) in events.iter().cloned().enumerate() {
            let t = apply(&session, event);
            assert_eq!(t.completed.is_some(), i == events.len() - 1, "step {}", i);
            session = t.session;
        }
    }

    #[test]
    fn invalid_rating_is_reprompted_without_mutation() {
        let mut events = happy_path();
        events.truncate(4);
        let before = run(events).session;
        assert_eq!(before.state(), DialogueState::AwaitingSatisfactionRating);

        let t = apply(&before, rating("7"));
        assert_eq!(t.session, before);
        assert_eq!(
            t.directives,
            vec![Directive::error(INVALID_RATING, Keyboard::Rating)]
        );

        let t = apply(&t.session, rating("3"));
        assert_eq!(t.session.state(), DialogueState::AwaitingInteractionProcessRating);
        assert_eq!(t.directives, vec![Directive::prompt_rating(INTERACTION_PROMPT)]);
    }

    #[test]
    fn empty_selection_is_rejected() {
        let t = run(vec![DialogueEvent::StartSubmission, DialogueEvent::RoleSelectionDone]);
        assert_eq!(t.session.state(), DialogueState::AwaitingPositionSelection);
        assert_eq!(
            t.directives,
            vec![Directive::error(EMPTY_SELECTION, Keyboard::None)]
        );
    }

    #[test]
    fn toggle_reemits_selection_state() {
        let t = run(vec![
            DialogueEvent::StartSubmission,
            DialogueEvent::ToggleRole {
                role: Position::Marketer,
            },
            DialogueEvent::ToggleRole {
                role: Position::Designer,
            },
        ]);
        assert_eq!(
            t.directives,
            vec![Directive::ShowRoleKeyboard {
                text: POSITION_PROMPT.to_string(),
                selected: vec![Position::Marketer, Position::Designer],
            }]
        );
    }

    #[test]
    fn selection_done_confirms_choice_and_asks_experience() {
        let t = run(vec![
            DialogueEvent::StartSubmission,
            DialogueEvent::ToggleRole {
                role: Position::Marketer,
            },
            DialogueEvent::ToggleRole {
                role: Position::DataScientist,
            },
            DialogueEvent::RoleSelectionDone,
        ]);
        assert_eq!(t.session.state(), DialogueState::AwaitingExperienceDescription);
        assert_eq!(
            t.directives,
            vec![
                Directive::confirmation(
                    "You have selected: Marketer, Data Scientist",
                    Keyboard::None
                ),
                Directive::prompt(EXPERIENCE_PROMPT),
            ]
        );
    }

    #[test]
    fn stale_toggle_outside_selection_is_ignored() {
        let session = UserSession::new();
        let t = apply(
            &session,
            DialogueEvent::ToggleRole {
                role: Position::Designer,
            },
        );
        assert!(t.directives.is_empty());
        assert_eq!(t.session, session);
    }

    #[test]
    fn multi_rating_prompts_each_criterion_in_order() {
        let mut events = happy_path();
        events.truncate(6);
        let mut session = run(events).session;
        assert_eq!(session.state(), DialogueState::AwaitingMultipleRatings);

        for next in &Criterion::ALL[1..] {
            let t = apply(&session, rating("2"));
            assert_eq!(t.session.state(), DialogueState::AwaitingMultipleRatings);
            assert_eq!(t.directives, vec![Directive::prompt_rating(criterion_prompt(*next))]);
            session = t.session;
        }

        let t = apply(&session, rating("2"));
        assert_eq!(
            t.session.state(),
            DialogueState::AwaitingProfessionalDevelopmentEffect
        );
        assert_eq!(t.directives, vec![Directive::prompt(DEVELOPMENT_PROMPT)]);
    }

    #[test]
    fn first_criterion_prompt_explains_scale() {
        let mut events = happy_path();
        events.truncate(6);
        let t = run(events);
        assert_eq!(
            t.directives,
            vec![Directive::prompt_rating(format!(
                "{}\n\nWorking atmosphere in the team:",
                CRITERIA_INTRO
            ))]
        );
    }

    #[test]
    fn invalid_criterion_rating_keeps_cursor() {
        let mut events = happy_path();
        events.truncate(7);
        let session = run(events).session;
        let cursor = session.accumulator().criterion_cursor();
        let t = apply(&session, rating("abc"));
        assert_eq!(t.session.accumulator().criterion_cursor(), cursor);
        assert!(t.directives[0].is_error());
    }

    #[test]
    fn blank_free_text_is_rejected() {
        let mut events = happy_path();
        events.truncate(3);
        let session = run(events).session;
        let t = apply(&session, text("   "));
        assert_eq!(t.session, session);
        assert_eq!(t.directives, vec![Directive::error(EMPTY_ANSWER, Keyboard::None)]);
    }

    #[test]
    fn free_text_is_stored_trimmed() {
        let mut events = happy_path();
        events.truncate(3);
        events.push(text("  Learned Rust \n"));
        let t = run(events);
        assert_eq!(
            t.session.accumulator().draft().clone(),
            {
                let mut draft = crate::domain::review::SubmissionDraft::new();
                draft.toggle_position(Position::Designer);
                draft.set_experience_description("Learned Rust");
                draft
            }
        );
    }

    #[test]
    fn idle_text_falls_back_to_menu() {
        let t = apply(&UserSession::new(), text("hello"));
        assert!(t.session.is_idle());
        assert_eq!(
            t.directives,
            vec![Directive::error(USE_THE_MENU, Keyboard::MainMenu)]
        );
    }

    #[test]
    fn start_submission_restarts_an_active_dialogue() {
        let mut events = happy_path();
        events.truncate(5);
        events.push(DialogueEvent::StartSubmission);
        let t = run(events);
        assert_eq!(t.session.state(), DialogueState::AwaitingPositionSelection);
        assert_eq!(t.session.accumulator(), &Accumulator::default());
    }

    #[test]
    fn browse_events_become_queries() {
        let session = UserSession::new();
        assert_eq!(
            ReviewDialogue::step(&session, DialogueEvent::BrowseSummary, &profile()),
            Step::Query(BrowseQuery::Summary)
        );
        assert_eq!(
            ReviewDialogue::step(&session, DialogueEvent::BrowseSubmissions, &profile()),
            Step::Query(BrowseQuery::Submissions)
        );
    }

    #[test]
    fn greet_shows_menu_with_name() {
        let t = apply(&UserSession::new(), DialogueEvent::Greet);
        assert_eq!(
            t.directives,
            vec![Directive::ShowMainMenu {
                text: "Hello Ada Lovelace!\nThis is an employee review bot. Please choose an option:"
                    .to_string()
            }]
        );
    }

    proptest! {
        #[test]
        fn return_to_menu_always_resets(steps in 0usize..14) {
            let mut events = happy_path();
            events.truncate(steps);
            let mut session = UserSession::new();
            for event in events {
                session = apply(&session, event).session;
            }
            let t = apply(&session, DialogueEvent::ReturnToMenu);
            prop_assert!(t.session.is_idle());
            prop_assert!(t.session.accumulator().is_empty());
            prop_assert!(t.completed.is_none());
            prop_assert_eq!(
                t.directives,
                vec![Directive::confirmation(RETURNED_TO_MENU, Keyboard::MainMenu)]
            );
        }

        #[test]
        fn toggling_a_role_twice_restores_selection(index in 0usize..11) {
            let role = Position::ALL[index];
            let start = apply(&UserSession::new(), DialogueEvent::StartSubmission).session;
            let once = apply(&start, DialogueEvent::ToggleRole { role }).session;
            let twice = apply(&once, DialogueEvent::ToggleRole { role }).session;
            prop_assert_eq!(twice, start);
        }
    }
}
