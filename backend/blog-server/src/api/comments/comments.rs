//! Comment REST API handlers

use crate::api::blogs::blogs::post_not_found;
use crate::{
    ApiError, ApiResult, AppState, CommentDto, CommentListResponse, CommentResponse,
    CreateCommentRequest, CurrentIdentity, DeleteResponse,
};

use blog_core::Comment;
use blog_core::validation::normalize_comment;
use blog_db::{BlogPostRepository, CommentRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use log::info;
use uuid::Uuid;

/// GET /blog/{slug}/comments
pub async fn list_comments(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<CommentListResponse>> {
    let post = BlogPostRepository::new(state.pool.clone())
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| post_not_found(&slug))?;

    let comments = CommentRepository::new(state.pool.clone())
        .list_for_post(post.id)
        .await?;

    Ok(Json(CommentListResponse {
        comments: comments.into_iter().map(CommentDto::from).collect(),
    }))
}

/// POST /blog/{slug}/comments
pub async fn create_comment(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(slug): Path<String>,
    Json(req): Json<CreateCommentRequest>,
) -> ApiResult<(StatusCode, Json<CommentResponse>)> {
    let content = normalize_comment(&req.content)?;

    let post = BlogPostRepository::new(state.pool.clone())
        .find_by_slug(&slug)
        .await?
        .ok_or_else(|| post_not_found(&slug))?;

    let comment = Comment::new(post.id, identity.id, content);
    CommentRepository::new(state.pool.clone())
        .create(&comment)
        .await?;

    info!("User {} commented on '{}'", identity.id, slug);

    Ok((
        StatusCode::CREATED,
        Json(CommentResponse {
            comment: CommentDto::new(comment, identity.name),
        }),
    ))
}

/// DELETE /comments/{id}
///
/// Comment authors may delete their own comments; admins may delete any.
pub async fn delete_comment(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(comment_id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let comment_uuid = Uuid::parse_str(&comment_id)?;

    let repo = CommentRepository::new(state.pool.clone());
    let comment = repo
        .find_by_id(comment_uuid)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Comment {comment_id} not found")))?;

    if !identity.can_manage(comment.user_id) {
        return Err(ApiError::forbidden());
    }

    repo.delete(comment.id).await?;

    info!("User {} deleted comment {}", identity.id, comment.id);

    Ok(Json(DeleteResponse {
        deleted_id: comment.id.to_string(),
    }))
}
