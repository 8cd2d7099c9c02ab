use crate::{ApiError, ApiResult, AppState, CurrentIdentity, UpdateRoleRequest, UserResponse};

use blog_core::{Identity, Role};
use blog_db::UserRepository;

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State},
};
use chrono::Utc;
use log::{info, warn};
use uuid::Uuid;

/// PUT /admin/users/{id}/role
///
/// The target user's live sessions are rewritten, so the new role applies
/// on their next request without logging in again.
pub async fn update_user_role(
    State(state): State<AppState>,
    CurrentIdentity(admin): CurrentIdentity,
    Path(user_id): Path<String>,
    Json(req): Json<UpdateRoleRequest>,
) -> ApiResult<Json<UserResponse>> {
    let user_uuid = Uuid::parse_str(&user_id)?;
    let role = Role::from_str(&req.role)?;

    let user = UserRepository::new(state.pool.clone())
        .update_role(user_uuid, role, Utc::now())
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {user_id} not found")))?;

    match state.sessions.refresh_identity(&Identity::from(&user)).await {
        Ok(count) => info!(
            "Admin {} set role of {} to {}, refreshed {} session(s)",
            admin.id, user.id, role, count
        ),
        Err(e) => warn!(
            "Admin {} set role of {} to {} but session refresh failed: {}",
            admin.id, user.id, role, e
        ),
    }

    Ok(Json(UserResponse { user: user.into() }))
}
