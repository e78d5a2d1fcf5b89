//! State machine trait for dialogue state enums.

use super::ValidationError;

/// Trait for state enums whose legal moves can be enumerated.
///
/// Implementors list the successors of each state; `can_transition_to` and
/// `transition_to` are derived from that list.
///
/// ```ignore
/// let next = DialogueState::AwaitingSatisfactionRating
///     .transition_to(DialogueState::AwaitingInteractionProcessRating)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns all valid target states from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.valid_transitions().contains(target)
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Door {
        Closed,
        Open,
        Removed,
    }

    impl StateMachine for Door {
        fn valid_transitions(&self) -> Vec<Self> {
            match self {
                Door::Closed => vec![Door::Open, Door::Removed],
                Door::Open => vec![Door::Closed],
                Door::Removed => vec![],
            }
        }
    }

    #[test]
    fn transition_to_succeeds_for_listed_successor() {
        assert_eq!(Door::Closed.transition_to(Door::Open), Ok(Door::Open));
    }

    #[test]
    fn transition_to_fails_for_unlisted_target() {
        assert!(Door::Open.transition_to(Door::Removed).is_err());
    }

    #[test]
    fn terminal_state_has_no_successors() {
        assert!(Door::Removed.is_terminal());
        assert!(!Door::Closed.is_terminal());
    }
}
