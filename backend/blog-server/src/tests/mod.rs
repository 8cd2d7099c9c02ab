mod api;
mod middleware;

use crate::ResolvedSession;

use blog_auth::Session;
use blog_core::{Identity, Role};

use chrono::Duration;
use uuid::Uuid;

pub(crate) fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Unit".to_string(),
        email: "unit@example.com".to_string(),
        role,
    }
}

pub(crate) fn resolved(role: Option<Role>) -> ResolvedSession {
    ResolvedSession(role.map(|r| Session::authenticated(identity(r), Duration::hours(1))))
}
