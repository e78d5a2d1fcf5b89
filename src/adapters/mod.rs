//! Adapters - Implementations of ports and transports.
//!
//! - `storage` - Submission stores (JSON file, in-memory)
//! - `session` - Dialogue session stores
//! - `presenter` - Text rendering and parsing of dialogue traffic
//! - `http` - axum REST endpoints

pub mod http;
pub mod presenter;
pub mod session;
pub mod storage;
