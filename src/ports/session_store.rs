//! Session Store Port - Interface for per-user dialogue sessions.
//!
//! Sessions are ephemeral. An idle session carries no data, so storing
//! one is the same as clearing the entry.

use async_trait::async_trait;

use crate::domain::dialogue::UserSession;
use crate::domain::foundation::UserId;

/// Port for keeping in-progress dialogues between turns
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Current session for a user; a fresh idle session if none is stored.
    async fn get(&self, user_id: &UserId) -> UserSession;

    /// Replace the user's session.
    async fn put(&self, user_id: &UserId, session: UserSession);

    /// Forget the user's session.
    async fn clear(&self, user_id: &UserId);
}
