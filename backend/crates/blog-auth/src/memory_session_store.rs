use crate::{Result as AuthErrorResult, Session, SessionStore, SessionToken};

use blog_core::Identity;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

/// Process-local session store. Sessions do not survive a restart.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, Session>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self, token: &SessionToken) -> AuthErrorResult<Option<Session>> {
        let sessions = self.sessions.read().await;
        let now = Utc::now();

        Ok(sessions
            .get(token)
            .filter(|session| !session.is_expired_at(now))
            .cloned())
    }

    async fn save(&self, session: &Session) -> AuthErrorResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        Ok(())
    }

    async fn destroy(&self, token: &SessionToken) -> AuthErrorResult<()> {
        let mut sessions = self.sessions.write().await;
        sessions.remove(token);
        Ok(())
    }

    async fn refresh_identity(&self, identity: &Identity) -> AuthErrorResult<u64> {
        let mut sessions = self.sessions.write().await;
        let mut touched = 0;

        for session in sessions.values_mut() {
            if session.identity().is_some_and(|current| current.id == identity.id) {
                session.refresh(identity.clone());
                touched += 1;
            }
        }

        Ok(touched)
    }

    async fn purge_expired(&self) -> AuthErrorResult<u64> {
        let mut sessions = self.sessions.write().await;
        let now = Utc::now();
        let before = sessions.len();

        sessions.retain(|_, session| !session.is_expired_at(now));

        Ok((before - sessions.len()) as u64)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
