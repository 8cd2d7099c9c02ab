//! The caller's own account

use crate::{ApiError, ApiResult, AppState, CurrentIdentity, UpdateSettingsRequest, UserResponse};

use blog_core::validation::{normalize_email, normalize_name, validate_password};
use blog_core::{Identity, User};
use blog_db::UserRepository;

use axum::{Json, extract::State};
use chrono::Utc;
use log::{info, warn};

/// GET /setting
pub async fn get_settings(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<UserResponse>> {
    let user = load_account(&UserRepository::new(state.pool.clone()), &identity).await?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// PUT /setting
///
/// Every live session of the user picks up the new name and email.
pub async fn update_settings(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<UpdateSettingsRequest>,
) -> ApiResult<Json<UserResponse>> {
    let repo = UserRepository::new(state.pool.clone());
    let mut user = load_account(&repo, &identity).await?;

    if let Some(name) = req.name {
        user.name = normalize_name(&name)?;
    }
    if let Some(email) = req.email {
        user.email = normalize_email(&email)?;
    }
    if let Some(password) = req.password {
        validate_password(&password, state.auth.min_password_length)?;
        user.password_hash = state.hasher.hash(&password).await?;
    }
    user.updated_at = Utc::now();

    match repo.update_profile(&user).await {
        Ok(true) => {}
        Ok(false) => return Err(account_not_found(&identity)),
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict("Email already in use"));
        }
        Err(e) => return Err(e.into()),
    }

    match state.sessions.refresh_identity(&Identity::from(&user)).await {
        Ok(count) => info!("Updated profile of {}, refreshed {} session(s)", user.id, count),
        Err(e) => warn!("Updated profile of {} but session refresh failed: {}", user.id, e),
    }

    Ok(Json(UserResponse { user: user.into() }))
}

async fn load_account(repo: &UserRepository, identity: &Identity) -> ApiResult<User> {
    repo.find_by_id(identity.id)
        .await?
        .ok_or_else(|| account_not_found(identity))
}

#[track_caller]
fn account_not_found(identity: &Identity) -> ApiError {
    ApiError::not_found(format!("Account {} not found", identity.id))
}
