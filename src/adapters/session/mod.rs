//! Session Adapters
//!
//! - **InMemorySessionStore** - Per-user dialogue sessions kept in memory

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
