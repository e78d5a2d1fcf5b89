//! Dialogue state machine.
//!
//! Defines where a user is in the review questionnaire and which moves are legal.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// The step of the questionnaire a user is on.
///
/// The pipeline is strictly linear; any non-idle state may also fall back to
/// `Idle` (menu reset) or restart at `AwaitingPositionSelection`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DialogueState {
    /// No questionnaire in progress.
    #[default]
    Idle,

    /// Question 1: multi-select of positions.
    AwaitingPositionSelection,

    /// Question 2: free-text description of the experience gained.
    AwaitingExperienceDescription,

    /// Question 3: satisfaction with the experience.
    AwaitingSatisfactionRating,

    /// Question 4: team interaction processes.
    AwaitingInteractionProcessRating,

    /// Question 5: one rating per fixed criterion, one criterion per turn.
    AwaitingMultipleRatings,

    /// Question 6: free-text effect on professional development.
    AwaitingProfessionalDevelopmentEffect,

    /// Question 7: overall satisfaction; a valid answer completes the submission.
    AwaitingOverallSatisfactionRating,
}

impl DialogueState {
    /// Returns the next question in the pipeline, or `None` after the last one.
    pub fn next(&self) -> Option<Self> {
        use DialogueState::*;
        match self {
            Idle => Some(AwaitingPositionSelection),
            AwaitingPositionSelection => Some(AwaitingExperienceDescription),
            AwaitingExperienceDescription => Some(AwaitingSatisfactionRating),
            AwaitingSatisfactionRating => Some(AwaitingInteractionProcessRating),
            AwaitingInteractionProcessRating => Some(AwaitingMultipleRatings),
            AwaitingMultipleRatings => Some(AwaitingProfessionalDevelopmentEffect),
            AwaitingProfessionalDevelopmentEffect => Some(AwaitingOverallSatisfactionRating),
            AwaitingOverallSatisfactionRating => None,
        }
    }

    /// Returns true if a questionnaire is in progress.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Returns true if this state expects a 1-5 rating.
    pub fn expects_rating(&self) -> bool {
        matches!(
            self,
            Self::AwaitingSatisfactionRating
                | Self::AwaitingInteractionProcessRating
                | Self::AwaitingMultipleRatings
                | Self::AwaitingOverallSatisfactionRating
        )
    }
}

impl StateMachine for DialogueState {
    fn valid_transitions(&self) -> Vec<Self> {
        use DialogueState::*;
        match self {
            Idle => vec![AwaitingPositionSelection],
            active => {
                let mut targets: Vec<Self> = active.next().into_iter().collect();
                targets.push(Idle);
                if *active != AwaitingPositionSelection {
                    targets.push(AwaitingPositionSelection);
                }
                targets
            }
        }
    }
}
