//! Dialogue domain module.
//!
//! The per-user questionnaire: states, the accumulator carried between
//! turns, the input/output alphabets and the transition function.

mod browse;
mod directive;
mod event;
mod machine;
mod session;
mod state;

pub use browse::{
    answer_query, list_submissions, select_submission, AMBIGUOUS_REVIEWER, REVIEW_NOT_FOUND,
    USER_NOT_FOUND,
};
pub use directive::{Directive, Keyboard, SubmissionDetail, SubmissionListEntry};
pub use event::DialogueEvent;
pub use machine::{
    BrowseQuery, ReviewDialogue, Step, Transition, BROWSE_MENU, CRITERIA_INTRO,
    DEVELOPMENT_PROMPT, EMPTY_ANSWER, EMPTY_SELECTION, EXPERIENCE_PROMPT, INTERACTION_PROMPT,
    INVALID_RATING, OVERALL_PROMPT, POSITION_PROMPT, RETURNED_TO_MENU, REVIEW_SAVED,
    SATISFACTION_PROMPT, SELECTION_PENDING, USE_THE_MENU,
};
pub use session::{Accumulator, UserSession};
pub use state::DialogueState;
