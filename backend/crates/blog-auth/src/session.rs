use blog_core::Identity;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const TOKEN_LENGTH: usize = 64;

/// Opaque session key delivered to the client in a cookie.
///
/// Deserialization goes through [`SessionToken::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SessionToken(String);

impl SessionToken {
    /// 64 lowercase hex characters from two v4 UUIDs
    pub fn generate() -> Self {
        Self(format!(
            "{}{}",
            Uuid::new_v4().simple(),
            Uuid::new_v4().simple()
        ))
    }

    /// Accept only well-formed tokens so garbage cookies never reach a store.
    pub fn parse(raw: &str) -> Option<Self> {
        let well_formed = raw.len() == TOKEN_LENGTH
            && raw
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));

        well_formed.then(|| Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SessionToken {
    type Error = &'static str;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw).ok_or("malformed session token")
    }
}

impl From<SessionToken> for String {
    fn from(token: SessionToken) -> Self {
        token.0
    }
}

impl std::fmt::Display for SessionToken {
    /// Only a prefix is shown so tokens never end up whole in logs
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = self.0.get(..8).unwrap_or(&self.0);
        write!(f, "{prefix}…")
    }
}

/// Server-side state for one client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: SessionToken,
    pub identity: Option<Identity>,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Fresh session for a user who just proved their credentials
    pub fn authenticated(identity: Identity, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            token: SessionToken::generate(),
            identity: Some(identity),
            created_at: now,
            expires_at: now + ttl,
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Replace the stored identity, keeping token and expiry
    pub fn refresh(&mut self, identity: Identity) {
        self.identity = Some(identity);
    }
}
