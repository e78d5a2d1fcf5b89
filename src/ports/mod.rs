//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SubmissionStore` - Durable record-set of finished submissions
//! - `SessionStore` - Per-user in-progress dialogue sessions

mod session_store;
mod submission_store;

pub use session_store::SessionStore;
pub use submission_store::{StoreError, SubmissionStore};
