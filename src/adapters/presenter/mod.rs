//! Dialogue presenters.
//!
//! - **TextPresenter** - Button labels and callback data in, text messages out

mod text;

pub use text::{InlineButton, KeyboardMarkup, OutboundMessage, TextPresenter};
