use crate::ApiError;
use crate::middleware::resolve_session::ResolvedSession;

use blog_auth::{GateChain, GateDecision};

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Runs a [`GateChain`] in front of the wrapped routes.
///
/// Install with `route_layer(from_fn_with_state(chain, enforce_gates))` so
/// unmatched paths still fall through to the 404 fallback.
pub async fn enforce_gates(
    State(chain): State<GateChain>,
    request: Request,
    next: Next,
) -> Response {
    let decision = chain.evaluate(
        request
            .extensions()
            .get::<ResolvedSession>()
            .and_then(ResolvedSession::session),
    );

    match decision {
        GateDecision::Proceed => next.run(request).await,
        GateDecision::Halt(rejection) => ApiError::from(rejection).into_response(),
    }
}
