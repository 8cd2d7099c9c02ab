use crate::{ApiError, IdentityDto, MaybeIdentity};

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub name: &'static str,
    pub version: &'static str,
    /// Present when the caller is logged in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<IdentityDto>,
}

/// GET /
pub async fn home(MaybeIdentity(identity): MaybeIdentity) -> Json<HomeResponse> {
    Json(HomeResponse {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        user: identity.map(IdentityDto::from),
    })
}

/// Fallback for paths no route or static file matches
pub async fn page_not_found() -> ApiError {
    ApiError::not_found("Page not found")
}
