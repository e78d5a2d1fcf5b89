//! Application layer - Commands and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.

pub mod handlers;

pub use handlers::{
    DialogueCommand, DialogueError, DialogueOutcome, HandleDialogueEventHandler, SAVE_FAILED,
};
