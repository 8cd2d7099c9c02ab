//! Role landing pages. Each route sits behind an authorization gate for
//! exactly one role.

use crate::{
    AdminDashboardResponse, ApiResult, AppState, BlogPostDto, CurrentIdentity, DashboardResponse,
    UserDto,
};

use blog_db::{BlogPostRepository, UserRepository};

use axum::{Json, extract::State};

/// GET /admin
pub async fn admin_dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<AdminDashboardResponse>> {
    let users = UserRepository::new(state.pool.clone()).list().await?;

    Ok(Json(AdminDashboardResponse {
        user: identity.into(),
        users: users.into_iter().map(UserDto::from).collect(),
    }))
}

/// GET /author
pub async fn author_dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<DashboardResponse>> {
    let posts = BlogPostRepository::new(state.pool.clone())
        .list_by_author(identity.id)
        .await?;

    Ok(Json(DashboardResponse {
        user: identity.into(),
        posts: posts.into_iter().map(BlogPostDto::from).collect(),
    }))
}

/// GET /user
pub async fn user_dashboard(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
) -> ApiResult<Json<DashboardResponse>> {
    let posts = BlogPostRepository::new(state.pool.clone()).list().await?;

    Ok(Json(DashboardResponse {
        user: identity.into(),
        posts: posts.into_iter().map(BlogPostDto::from).collect(),
    }))
}
