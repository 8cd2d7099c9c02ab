//! Axum extractors reading the session resolved by middleware

use crate::ApiError;
use crate::middleware::resolve_session::ResolvedSession;

use blog_auth::GateRejection;
use blog_core::Identity;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity of the logged-in caller.
///
/// Rejects with the same 401 body as the authentication gate, so a handler
/// that forgot its gate still cannot run anonymously.
pub struct CurrentIdentity(pub Identity);

impl<S: Send + Sync> FromRequestParts<S> for CurrentIdentity {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            parts
                .extensions
                .get::<ResolvedSession>()
                .and_then(ResolvedSession::identity)
                .cloned()
                .map(CurrentIdentity)
                .ok_or_else(|| ApiError::from(GateRejection::Unauthenticated))
        }
    }
}
