
use crate::Session;

use blog_core::{Identity, Role};

use chrono::Duration;
use uuid::Uuid;

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Test User".to_string(),
        email: "test@example.com".to_string(),
        role,
    }
}

pub(crate) fn session_with(role: Role) -> Session {
    Session::authenticated(identity(role), Duration::hours(2))
}

/// A session object that exists but holds no identity
pub(crate) fn empty_session() -> Session {
    let mut session = session_with(Role::User);
    session.identity = None;
    session
}
