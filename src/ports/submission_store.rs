//! Submission Store Port - Interface for the durable record-set.
//!
//! The store holds every finished submission, keyed by reviewer. Reads are
//! fail-soft: a missing or unreadable backing store yields an empty
//! record-set instead of an error.

use async_trait::async_trait;

use crate::domain::foundation::UserId;
use crate::domain::review::{RecordSet, ReviewerProfile, Submission};

/// Errors that can occur while writing submissions
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize record-set: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

/// Port for persisting finished submissions
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Load the whole record-set.
    ///
    /// Never fails: an absent, empty or corrupt backing store is reported
    /// as an empty record-set.
    async fn load(&self) -> RecordSet;

    /// Replace the whole record-set.
    ///
    /// # Errors
    /// Returns `StoreError` if the write does not complete. A failed write
    /// must leave the previous contents readable.
    async fn save(&self, records: &RecordSet) -> Result<(), StoreError>;

    /// Append one submission to a reviewer's history.
    ///
    /// Creates the reviewer record if needed and refreshes its display
    /// name and handle from `profile`. Concurrent appends must not lose
    /// each other's submissions.
    ///
    /// # Errors
    /// Returns `StoreError` if the existing history cannot be read or the
    /// write does not complete. Either way the stored history is unchanged.
    async fn append(
        &self,
        user_id: &UserId,
        submission: &Submission,
        profile: &ReviewerProfile,
    ) -> Result<(), StoreError>;
}
