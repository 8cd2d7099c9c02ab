use crate::tests::resolved;
use crate::{ApiError, CurrentIdentity, MaybeIdentity};

use blog_core::Role;

use axum::{body::Body, extract::FromRequestParts, http::Request};

fn parts_with(session: Option<crate::ResolvedSession>) -> axum::http::request::Parts {
    let mut request = Request::builder().body(Body::empty()).unwrap();
    if let Some(session) = session {
        request.extensions_mut().insert(session);
    }
    request.into_parts().0
}

#[tokio::test]
async fn test_current_identity_with_session_returns_identity() {
    let session = resolved(Some(Role::Author));
    let expected = session.identity().cloned().unwrap();
    let mut parts = parts_with(Some(session));

    let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;

    assert_eq!(result.ok().map(|c| c.0), Some(expected));
}

#[tokio::test]
async fn test_current_identity_anonymous_is_unauthenticated() {
    let mut parts = parts_with(Some(resolved(None)));

    let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_current_identity_without_middleware_is_unauthenticated() {
    let mut parts = parts_with(None);

    let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;

    assert!(matches!(result, Err(ApiError::Unauthenticated { .. })));
}

#[tokio::test]
async fn test_maybe_identity_never_rejects() {
    let mut anonymous = parts_with(None);
    let mut member = parts_with(Some(resolved(Some(Role::User))));

    let Ok(MaybeIdentity(none)) = MaybeIdentity::from_request_parts(&mut anonymous, &()).await;
    let Ok(MaybeIdentity(some)) = MaybeIdentity::from_request_parts(&mut member, &()).await;

    assert!(none.is_none());
    assert_eq!(some.map(|i| i.role), Some(Role::User));
}
