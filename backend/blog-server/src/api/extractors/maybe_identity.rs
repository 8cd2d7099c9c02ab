use crate::middleware::resolve_session::ResolvedSession;

use blog_core::Identity;

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// Identity of the caller when there is one; public pages use it.
pub struct MaybeIdentity(pub Option<Identity>);

impl<S: Send + Sync> FromRequestParts<S> for MaybeIdentity {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            Ok(MaybeIdentity(
                parts
                    .extensions
                    .get::<ResolvedSession>()
                    .and_then(ResolvedSession::identity)
                    .cloned(),
            ))
        }
    }
}
