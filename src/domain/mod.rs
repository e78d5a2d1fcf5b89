//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, ratings, errors)
//! - `review` - Questionnaire catalogs, submissions and the record-set
//! - `dialogue` - Per-user questionnaire state machine
//! - `summary` - Pure aggregation over stored submissions

pub mod dialogue;
pub mod foundation;
pub mod review;
pub mod summary;
