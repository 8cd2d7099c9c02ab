use crate::ResolvedSession;
use crate::middleware::enforce_gates::enforce_gates;
use crate::tests::resolved;

use blog_auth::GateChain;
use blog_core::Role;

use axum::{
    Extension, Router,
    body::Body,
    http::{Request, StatusCode},
    middleware::from_fn_with_state,
    routing::get,
};
use tower::ServiceExt;

fn gated_router(chain: GateChain, session: Option<ResolvedSession>) -> Router {
    let router = Router::new()
        .route("/protected", get(|| async { "handler ran" }))
        .route_layer(from_fn_with_state(chain, enforce_gates));

    match session {
        Some(session) => router.layer(Extension(session)),
        None => router,
    }
}

async fn status_of(router: Router) -> StatusCode {
    router
        .oneshot(Request::get("/protected").body(Body::empty()).unwrap())
        .await
        .unwrap()
        .status()
}

#[tokio::test]
async fn test_authenticated_chain_rejects_anonymous_with_401() {
    let router = gated_router(GateChain::authenticated(), Some(resolved(None)));

    assert_eq!(status_of(router).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_resolved_session_counts_as_anonymous() {
    let router = gated_router(GateChain::authenticated(), None);

    assert_eq!(status_of(router).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_chain_rejects_wrong_role_with_403() {
    let router = gated_router(
        GateChain::protected(&[Role::Admin]),
        Some(resolved(Some(Role::User))),
    );

    assert_eq!(status_of(router).await, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_protected_chain_rejects_anonymous_with_401_not_403() {
    let router = gated_router(GateChain::protected(&[Role::Admin]), Some(resolved(None)));

    assert_eq!(status_of(router).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_chain_admits_allowed_role() {
    let router = gated_router(
        GateChain::protected(&[Role::Author, Role::Admin]),
        Some(resolved(Some(Role::Author))),
    );

    assert_eq!(status_of(router).await, StatusCode::OK);
}

#[tokio::test]
async fn test_empty_chain_admits_anonymous() {
    let router = gated_router(GateChain::new(), None);

    assert_eq!(status_of(router).await, StatusCode::OK);
}
