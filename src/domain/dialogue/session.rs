//! Per-user dialogue session and its accumulator.

use std::collections::BTreeMap;

use super::DialogueState;
use crate::domain::foundation::Rating;
use crate::domain::review::{Criterion, SubmissionDraft};

/// Scratch data gathered while a questionnaire is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Accumulator {
    pub(crate) draft: SubmissionDraft,
    criterion_cursor: usize,
    criterion_ratings: BTreeMap<Criterion, Rating>,
}

impl Accumulator {
    pub fn draft(&self) -> &SubmissionDraft {
        &self.draft
    }

    /// Criterion the next multi-rating answer belongs to, if any remain.
    pub fn current_criterion(&self) -> Option<Criterion> {
        Criterion::ALL.get(self.criterion_cursor).copied()
    }

    pub fn criterion_cursor(&self) -> usize {
        self.criterion_cursor
    }

    /// Starts the multi-rating phase from the first criterion.
    pub(crate) fn begin_criteria(&mut self) {
        self.criterion_cursor = 0;
        self.criterion_ratings.clear();
    }

    /// Records a rating for the current criterion and advances the cursor.
    ///
    /// Once every criterion is rated the collected map moves into the draft
    /// and `true` is returned.
    pub(crate) fn record_criterion(&mut self, rating: Rating) -> bool {
        if let Some(criterion) = self.current_criterion() {
            self.criterion_ratings.insert(criterion, rating);
            self.criterion_cursor += 1;
        }
        if self.criterion_cursor < Criterion::ALL.len() {
            return false;
        }
        self.draft
            .set_multiple_ratings(std::mem::take(&mut self.criterion_ratings));
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One user's place in the dialogue. Idle sessions carry an empty accumulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    state: DialogueState,
    accumulator: Accumulator,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DialogueState {
        self.state
    }

    pub fn accumulator(&self) -> &Accumulator {
        &self.accumulator
    }

    pub(crate) fn accumulator_mut(&mut self) -> &mut Accumulator {
        &mut self.accumulator
    }

    pub fn is_idle(&self) -> bool {
        !self.state.is_active()
    }

    /// Back to idle with nothing accumulated.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fresh questionnaire at the position-selection step.
    pub(crate) fn restart(&mut self) {
        self.reset();
        self.state = DialogueState::AwaitingPositionSelection;
    }

    pub(crate) fn set_state(&mut self, state: DialogueState) {
        self.state = state;
    }
}
