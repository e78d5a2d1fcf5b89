//! Review domain module.
//!
//! The questionnaire's catalogs, the submission entity and the persisted
//! record-set of every reviewer's history.

mod catalog;
mod record;
pub(crate) mod submission;

pub use catalog::{Criterion, Position};
pub use record::{RecordSet, ReviewerProfile, ReviewerRecord};
pub use submission::{Submission, SubmissionDraft};
