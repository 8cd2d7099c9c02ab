use crate::{Result as AuthErrorResult, Session, SessionToken};

use blog_core::Identity;

use async_trait::async_trait;

/// Key-value persistence for sessions, injected into the request pipeline.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch a live session. Expired sessions are reported as `None`.
    async fn load(&self, token: &SessionToken) -> AuthErrorResult<Option<Session>>;

    /// Insert or replace a session
    async fn save(&self, session: &Session) -> AuthErrorResult<()>;

    /// Remove a session. Unknown tokens are not an error.
    async fn destroy(&self, token: &SessionToken) -> AuthErrorResult<()>;

    /// Rewrite the identity in every live session belonging to `identity.id`.
    /// Returns how many sessions were touched.
    async fn refresh_identity(&self, identity: &Identity) -> AuthErrorResult<u64>;

    /// Drop every expired session, returning how many were removed
    async fn purge_expired(&self) -> AuthErrorResult<u64>;

    /// Backend label for logs
    fn backend(&self) -> &'static str;
}
