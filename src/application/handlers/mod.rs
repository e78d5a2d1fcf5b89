//! Application handlers.
//!
//! Command handlers that orchestrate domain operations.

pub mod dialogue;

pub use dialogue::{
    DialogueCommand, DialogueError, DialogueOutcome, HandleDialogueEventHandler, SAVE_FAILED,
};
