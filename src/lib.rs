//! Review Bot - Conversational internship review collection
//!
//! Walks each user through a fixed questionnaire one message at a time,
//! stores completed reviews and answers browse and summary queries over them.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
