//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the review domain.

mod errors;
mod ids;
mod rating;
mod state_machine;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::UserId;
pub use rating::{validate_rating, Rating};
pub use state_machine::StateMachine;
