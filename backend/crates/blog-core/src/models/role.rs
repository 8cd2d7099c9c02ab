use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Coarse-grained permission tag carried by every user.
///
/// The set is closed: stored strings outside it are rejected when rows are
/// read, so a corrupted or mistyped role can never satisfy a gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Manages users and every post
    Admin,
    /// Writes and maintains their own posts
    Author,
    /// Reads, likes and comments
    #[default]
    User,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Author, Role::User];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Author => "author",
            Self::User => "user",
        }
    }

    /// Dashboard path a freshly logged-in user is sent to
    pub fn landing_path(&self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Author => "/author",
            Self::User => "/user",
        }
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Exact, case-sensitive match against the stored tags.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "admin" => Ok(Self::Admin),
            "author" => Ok(Self::Author),
            "user" => Ok(Self::User),
            _ => Err(CoreError::InvalidRole {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
