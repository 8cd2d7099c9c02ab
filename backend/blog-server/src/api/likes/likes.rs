use crate::api::blogs::blogs::post_not_found;
use crate::{ApiResult, AppState, CurrentIdentity, LikeResponse};

use blog_db::{BlogPostRepository, LikeRepository};

use axum::{
    Json,
    extract::{Path, State},
};

/// POST /blog/{slug}/like
pub async fn toggle_like(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(slug): Path<String>,
) -> ApiResult<Json<LikeResponse>> {
    let post = BlogPostRepository::new(state.pool.clone())
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| post_not_found(&slug))?;

    let repo = LikeRepository::new(state.pool.clone());
    let liked = repo.toggle(post.id, identity.id).await?;
    let likes = repo.count_for_post(post.id).await?;

    Ok(Json(LikeResponse { liked, likes }))
}
