//! In-Memory Submission Store Adapter
//!
//! Keeps the record-set in memory. Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::UserId;
use crate::domain::review::{RecordSet, ReviewerProfile, Submission};
use crate::ports::{StoreError, SubmissionStore};

/// In-memory storage for submissions
#[derive(Debug, Clone, Default)]
pub struct InMemorySubmissionStore {
    records: Arc<RwLock<RecordSet>>,
}

impl InMemorySubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with an existing record-set
    pub fn with_records(records: RecordSet) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    /// Get the number of stored submissions
    pub async fn submission_count(&self) -> usize {
        self.records.read().await.submission_count()
    }
}

#[async_trait]
impl SubmissionStore for InMemorySubmissionStore {
    async fn load(&self) -> RecordSet {
        self.records.read().await.clone()
    }

    async fn save(&self, records: &RecordSet) -> Result<(), StoreError> {
        *self.records.write().await = records.clone().normalized();
        Ok(())
    }

    async fn append(
        &self,
        user_id: &UserId,
        submission: &Submission,
        profile: &ReviewerProfile,
    ) -> Result<(), StoreError> {
        self.records
            .write()
            .await
            .append(user_id.clone(), submission.clone(), profile);
        Ok(())
    }
}
