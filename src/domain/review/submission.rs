//! Submission entity and its in-progress draft.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Criterion, Position};
use crate::domain::foundation::{Rating, ValidationError};

/// One completed questionnaire.
///
/// Only [`SubmissionDraft::finish`] and deserialization create one, so a
/// value of this type is always fully populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    positions: Vec<Position>,
    experience_description: String,
    satisfaction_rating: Rating,
    interaction_process_rating: Rating,
    multiple_ratings: BTreeMap<Criterion, Rating>,
    professional_development_effect: String,
    overall_satisfaction: Rating,
}

impl Submission {
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn experience_description(&self) -> &str {
        &self.experience_description
    }

    pub fn satisfaction_rating(&self) -> Rating {
        self.satisfaction_rating
    }

    pub fn interaction_process_rating(&self) -> Rating {
        self.interaction_process_rating
    }

    pub fn multiple_ratings(&self) -> &BTreeMap<Criterion, Rating> {
        &self.multiple_ratings
    }

    /// Rating given for one criterion, if the stored submission carries it.
    pub fn criterion_rating(&self, criterion: Criterion) -> Option<Rating> {
        self.multiple_ratings.get(&criterion).copied()
    }

    pub fn professional_development_effect(&self) -> &str {
        &self.professional_development_effect
    }

    pub fn overall_satisfaction(&self) -> Rating {
        self.overall_satisfaction
    }
}

/// Partially filled submission carried by a dialogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionDraft {
    positions: Vec<Position>,
    experience_description: Option<String>,
    satisfaction_rating: Option<Rating>,
    interaction_process_rating: Option<Rating>,
    multiple_ratings: BTreeMap<Criterion, Rating>,
    professional_development_effect: Option<String>,
    overall_satisfaction: Option<Rating>,
}

impl SubmissionDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the position if absent, removes it otherwise.
    ///
    /// Selection order is preserved. Returns whether the position is selected
    /// after the toggle.
    pub fn toggle_position(&mut self, position: Position) -> bool {
        if let Some(index) = self.positions.iter().position(|p| *p == position) {
            self.positions.remove(index);
            false
        } else {
            self.positions.push(position);
            true
        }
    }

    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    pub fn set_experience_description(&mut self, text: impl Into<String>) {
        self.experience_description = Some(text.into());
    }

    pub fn set_satisfaction_rating(&mut self, rating: Rating) {
        self.satisfaction_rating = Some(rating);
    }

    pub fn set_interaction_process_rating(&mut self, rating: Rating) {
        self.interaction_process_rating = Some(rating);
    }

    pub fn set_multiple_ratings(&mut self, ratings: BTreeMap<Criterion, Rating>) {
        self.multiple_ratings = ratings;
    }

    pub fn set_professional_development_effect(&mut self, text: impl Into<String>) {
        self.professional_development_effect = Some(text.into());
    }

    pub fn set_overall_satisfaction(&mut self, rating: Rating) {
        self.overall_satisfaction = Some(rating);
    }

    /// Turns the draft into a [`Submission`], failing on the first missing field.
    pub fn finish(self) -> Result<Submission, ValidationError> {
        if self.positions.is_empty() {
            return Err(ValidationError::empty_field("positions"));
        }
        if let Some(missing) = Criterion::ALL
            .iter()
            .find(|c| !self.multiple_ratings.contains_key(c))
        {
            return Err(ValidationError::empty_field(format!(
                "multiple_ratings.{}",
                missing
            )));
        }

        Ok(Submission {
            positions: self.positions,
            experience_description: self
                .experience_description
                .ok_or_else(|| ValidationError::empty_field("experience_description"))?,
            satisfaction_rating: self
                .satisfaction_rating
                .ok_or_else(|| ValidationError::empty_field("satisfaction_rating"))?,
            interaction_process_rating: self
                .interaction_process_rating
                .ok_or_else(|| ValidationError::empty_field("interaction_process_rating"))?,
            multiple_ratings: self.multiple_ratings,
            professional_development_effect: self
                .professional_development_effect
                .ok_or_else(|| ValidationError::empty_field("professional_development_effect"))?,
            overall_satisfaction: self
                .overall_satisfaction
                .ok_or_else(|| ValidationError::empty_field("overall_satisfaction"))?,
        })
    }
}
