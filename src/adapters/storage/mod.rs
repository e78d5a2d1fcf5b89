//! Storage Adapters
//!
//! Implementations of the SubmissionStore port.
//!
//! ## Available Adapters
//!
//! - **JsonSubmissionStore** - Stores the record-set as one JSON file
//! - **InMemorySubmissionStore** - Stores the record-set in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{InMemorySubmissionStore, JsonSubmissionStore};
//!
//! // Production: file-based storage
//! let store = JsonSubmissionStore::init("messages.json").await?;
//!
//! // Testing: in-memory storage
//! let store = InMemorySubmissionStore::new();
//! ```

mod in_memory_submission_store;
mod json_submission_store;

pub use in_memory_submission_store::InMemorySubmissionStore;
pub use json_submission_store::JsonSubmissionStore;
