//! In-Memory Session Store Adapter
//!
//! Holds one dialogue session per user. Sessions are lost on restart.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::dialogue::UserSession;
use crate::domain::foundation::UserId;
use crate::ports::SessionStore;

/// In-memory storage for dialogue sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<UserId, UserSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with a non-idle session
    pub async fn active_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &UserId) -> UserSession {
        self.sessions
            .read()
            .await
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }

    async fn put(&self, user_id: &UserId, session: UserSession) {
        let mut sessions = self.sessions.write().await;
        if session.is_idle() {
            sessions.remove(user_id);
        } else {
            sessions.insert(user_id.clone(), session);
        }
    }

    async fn clear(&self, user_id: &UserId) {
        self.sessions.write().await.remove(user_id);
    }
}
