use crate::AppState;
use crate::middleware::session_cookie;

use blog_auth::{Session, SessionStore, SessionToken};
use blog_core::Identity;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use log::warn;

/// Session attached to the request by [`resolve_session`].
///
/// Always present once the middleware ran; `None` means anonymous.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSession(pub Option<Session>);

impl ResolvedSession {
    pub fn session(&self) -> Option<&Session> {
        self.0.as_ref()
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.session().and_then(Session::identity)
    }
}

/// Looks up the session named by the request cookie and stores it in the
/// request extensions.
///
/// Never blocks a request: gates and extractors decide what an anonymous
/// request may do.
pub async fn resolve_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let session = match session_cookie::read_token(request.headers(), &state.session.cookie_name) {
        Some(token) => load(state.sessions.as_ref(), &token).await,
        None => None,
    };

    request.extensions_mut().insert(ResolvedSession(session));

    next.run(request).await
}

/// A failing store reads as "no session"; the request goes on anonymous.
async fn load(store: &dyn SessionStore, token: &SessionToken) -> Option<Session> {
    match store.load(token).await {
        Ok(session) => session.filter(|s| !s.is_expired()),
        Err(e) => {
            warn!(
                "Session lookup for {} failed on {} store, continuing anonymous: {}",
                token,
                store.backend(),
                e
            );
            None
        }
    }
}
