use crate::DbError;

use blog_auth::{AuthError, Result as AuthErrorResult, Session, SessionStore, SessionToken};
use blog_core::Identity;

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use log::{debug, warn};
use sqlx::{FromRow, SqlitePool};

/// Session store backed by the `sessions` table.
///
/// Timestamps are stored in milliseconds; the identity is stored as JSON and
/// decoded through the closed `Role` set, so a tampered row fails to load.
#[derive(Clone)]
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct SessionRow {
    token: String,
    identity: Option<String>,
    created_at: i64,
    expires_at: i64,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    #[track_caller]
    fn store_error(e: impl Into<DbError>) -> AuthError {
        AuthError::SessionStore {
            message: e.into().to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    fn invalid(message: impl Into<String>) -> AuthError {
        AuthError::InvalidSession {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    fn encode_identity(identity: &Identity) -> AuthErrorResult<String> {
        serde_json::to_string(identity).map_err(|e| Self::invalid(e.to_string()))
    }

    fn decode(row: SessionRow) -> AuthErrorResult<Session> {
        let token = SessionToken::parse(&row.token)
            .ok_or_else(|| Self::invalid("malformed token in sessions table"))?;

        let identity = row
            .identity
            .map(|json| serde_json::from_str::<Identity>(&json))
            .transpose()
            .map_err(|e| Self::invalid(format!("identity for session {token}: {e}")))?;

        let created_at = DateTime::from_timestamp_millis(row.created_at)
            .ok_or_else(|| Self::invalid("created_at out of range"))?;
        let expires_at = DateTime::from_timestamp_millis(row.expires_at)
            .ok_or_else(|| Self::invalid("expires_at out of range"))?;

        Ok(Session {
            token,
            identity,
            created_at,
            expires_at,
        })
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn load(&self, token: &SessionToken) -> AuthErrorResult<Option<Session>> {
        let row: Option<SessionRow> = sqlx::query_as(
            r#"
              SELECT token, identity, created_at, expires_at
              FROM sessions
              WHERE token = ? AND expires_at > ?
              "#,
        )
        .bind(token.as_str())
        .bind(Utc::now().timestamp_millis())
        .fetch_optional(&self.pool)
        .await
        .map_err(Self::store_error)?;

        row.map(Self::decode)
            .transpose()
            .inspect_err(|e| warn!("Unreadable session {} in sessions table: {}", token, e))
    }

    async fn save(&self, session: &Session) -> AuthErrorResult<()> {
        let identity = session.identity().map(Self::encode_identity).transpose()?;
        let user_id = session.identity().map(|i| i.id.to_string());

        sqlx::query(
            r#"
              INSERT INTO sessions (token, user_id, identity, created_at, expires_at)
              VALUES (?, ?, ?, ?, ?)
              ON CONFLICT(token) DO UPDATE SET
                  user_id = excluded.user_id,
                  identity = excluded.identity,
                  expires_at = excluded.expires_at
              "#,
        )
        .bind(session.token.as_str())
        .bind(user_id)
        .bind(identity)
        .bind(session.created_at.timestamp_millis())
        .bind(session.expires_at.timestamp_millis())
        .execute(&self.pool)
        .await
        .map_err(Self::store_error)?;

        Ok(())
    }

    async fn destroy(&self, token: &SessionToken) -> AuthErrorResult<()> {
        sqlx::query("DELETE FROM sessions WHERE token = ?")
            .bind(token.as_str())
            .execute(&self.pool)
            .await
            .map_err(Self::store_error)?;

        Ok(())
    }

    async fn refresh_identity(&self, identity: &Identity) -> AuthErrorResult<u64> {
        let json = Self::encode_identity(identity)?;

        let result = sqlx::query("UPDATE sessions SET identity = ? WHERE user_id = ? AND expires_at > ?")
            .bind(json)
            .bind(identity.id.to_string())
            .bind(Utc::now().timestamp_millis())
            .execute(&self.pool)
            .await
            .map_err(Self::store_error)?;

        Ok(result.rows_affected())
    }

    async fn purge_expired(&self) -> AuthErrorResult<u64> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at <= ?")
            .bind(Utc::now().timestamp_millis())
            .execute(&self.pool)
            .await
            .map_err(Self::store_error)?;

        if result.rows_affected() > 0 {
            debug!("Purged {} expired session(s)", result.rows_affected());
        }

        Ok(result.rows_affected())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
