//! Dialogue handlers.

mod handle_event;

pub use handle_event::{
    DialogueCommand, DialogueError, DialogueOutcome, HandleDialogueEventHandler, SAVE_FAILED,
};
