//! HandleDialogueEventHandler - Applies one inbound event to a user's dialogue.
//!
//! Loads the session, runs the pure transition, persists a completed
//! submission before keeping the new session, and answers browse queries
//! from the submission store.

use std::sync::Arc;

use crate::domain::dialogue::{
    answer_query, DialogueEvent, DialogueState, Directive, Keyboard, ReviewDialogue, Step,
    Transition,
};
use crate::domain::foundation::UserId;
use crate::domain::review::{ReviewerProfile, Submission};
use crate::ports::{SessionStore, StoreError, SubmissionStore};

pub const SAVE_FAILED: &str =
    "Sorry, your review could not be saved. Please send your overall rating again.";

/// One inbound event from a user.
#[derive(Debug, Clone)]
pub struct DialogueCommand {
    pub user_id: UserId,
    pub profile: ReviewerProfile,
    pub event: DialogueEvent,
}

/// What the presenter should show, and where the dialogue now stands.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueOutcome {
    pub directives: Vec<Directive>,
    pub state: DialogueState,
}

/// Failures while orchestrating a dialogue step.
///
/// None of these end the process; each becomes an `Error` directive.
#[derive(Debug, thiserror::Error)]
pub enum DialogueError {
    #[error("failed to persist submission: {0}")]
    Persistence(#[from] StoreError),
}

impl DialogueError {
    pub fn to_directive(&self) -> Directive {
        match self {
            DialogueError::Persistence(_) => Directive::error(SAVE_FAILED, Keyboard::Rating),
        }
    }
}

/// Handler for dialogue events.
pub struct HandleDialogueEventHandler {
    sessions: Arc<dyn SessionStore>,
    submissions: Arc<dyn SubmissionStore>,
}

impl HandleDialogueEventHandler {
    pub fn new(sessions: Arc<dyn SessionStore>, submissions: Arc<dyn SubmissionStore>) -> Self {
        Self {
            sessions,
            submissions,
        }
    }

    pub async fn handle(&self, cmd: DialogueCommand) -> DialogueOutcome {
        let session = self.sessions.get(&cmd.user_id).await;
        let kind = cmd.event.kind();

        match ReviewDialogue::step(&session, cmd.event, &cmd.profile) {
            Step::Query(query) => {
                let records = self.submissions.load().await;
                tracing::debug!(user_id = %cmd.user_id, event = kind, "Answered browse query");
                DialogueOutcome {
                    directives: vec![answer_query(&records, query)],
                    state: session.state(),
                }
            }
            Step::Transition(Transition {
                session: next,
                directives,
                completed,
            }) => {
                if let Some(submission) = completed {
                    if let Err(err) = self.persist(&cmd.user_id, &submission, &cmd.profile).await {
                        tracing::error!(
                            user_id = %cmd.user_id,
                            error = %err,
                            "Submission rejected, keeping dialogue open"
                        );
                        return DialogueOutcome {
                            directives: vec![err.to_directive()],
                            state: session.state(),
                        };
                    }
                }

                tracing::debug!(
                    user_id = %cmd.user_id,
                    event = kind,
                    from = ?session.state(),
                    to = ?next.state(),
                    "Dialogue transition"
                );
                let state = next.state();
                self.sessions.put(&cmd.user_id, next).await;
                DialogueOutcome { directives, state }
            }
        }
    }

    async fn persist(
        &self,
        user_id: &UserId,
        submission: &Submission,
        profile: &ReviewerProfile,
    ) -> Result<(), DialogueError> {
        self.submissions.append(user_id, submission, profile).await?;
        Ok(())
    }
}
