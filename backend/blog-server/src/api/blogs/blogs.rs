//! Blog post REST API handlers

use crate::{
    ApiError, ApiResult, AppState, BlogPostDto, BlogPostListResponse, BlogPostResponse,
    CreateBlogPostRequest, CurrentIdentity, DeleteResponse, UpdateBlogPostRequest,
};

use blog_core::validation::{normalize_title, validate_content};
use blog_core::{BlogPost, Identity, slugify};
use blog_db::BlogPostRepository;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use log::info;

/// GET /blogs
pub async fn list_blog_posts(State(state): State<AppState>) -> ApiResult<Json<BlogPostListResponse>> {
    let posts = BlogPostRepository::new(state.pool.clone()).list().await?;

    Ok(Json(BlogPostListResponse {
        posts: posts.into_iter().map(BlogPostDto::from).collect(),
    }))
}

/// GET /blog/{slug}
pub async fn get_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<BlogPostResponse>> {
    let post = BlogPostRepository::new(state.pool.clone())
        .find_listing_by_slug(&slug)
        .await?
        .ok_or_else(|| post_not_found(&slug))?;

    Ok(Json(BlogPostResponse { post: post.into() }))
}

/// POST /blogs
pub async fn create_blog_post(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Json(req): Json<CreateBlogPostRequest>,
) -> ApiResult<(StatusCode, Json<BlogPostResponse>)> {
    let title = normalize_title(&req.title)?;
    validate_content(&req.content)?;

    let repo = BlogPostRepository::new(state.pool.clone());
    let slug = repo.available_slug(&slugify(&title)).await?;
    let post = BlogPost::new(slug, title, req.content, identity.id);

    match repo.create(&post).await {
        Ok(()) => {}
        // Another request took the slug between the check and the insert
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict(format!(
                "Slug '{}' was taken concurrently, retry",
                post.slug
            )));
        }
        Err(e) => return Err(e.into()),
    }

    info!("User {} created post '{}'", identity.id, post.slug);

    Ok((StatusCode::CREATED, Json(BlogPostResponse { post: post.into() })))
}

/// PUT /blog/{slug}
pub async fn update_blog_post(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(slug): Path<String>,
    Json(req): Json<UpdateBlogPostRequest>,
) -> ApiResult<Json<BlogPostResponse>> {
    let repo = BlogPostRepository::new(state.pool.clone());
    let mut post = find_managed_post(&repo, &identity, &slug).await?;

    if let Some(title) = req.title {
        post.title = normalize_title(&title)?;
    }
    if let Some(content) = req.content {
        validate_content(&content)?;
        post.content = content;
    }
    post.updated_at = Utc::now();

    if !repo.update(&post).await? {
        return Err(post_not_found(&slug));
    }

    info!("User {} updated post '{}'", identity.id, post.slug);

    Ok(Json(BlogPostResponse { post: post.into() }))
}

/// DELETE /blog/{slug}
pub async fn delete_blog_post(
    State(state): State<AppState>,
    CurrentIdentity(identity): CurrentIdentity,
    Path(slug): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let repo = BlogPostRepository::new(state.pool.clone());
    let post = find_managed_post(&repo, &identity, &slug).await?;

    if !repo.delete(post.id).await? {
        return Err(post_not_found(&slug));
    }

    info!("User {} deleted post '{}'", identity.id, slug);

    Ok(Json(DeleteResponse {
        deleted_id: post.id.to_string(),
    }))
}

/// Post by slug, provided the caller wrote it or is an admin
async fn find_managed_post(
    repo: &BlogPostRepository,
    identity: &Identity,
    slug: &str,
) -> ApiResult<BlogPost> {
    let post = repo
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| post_not_found(slug))?;

    if !identity.can_manage(post.author_id) {
        return Err(ApiError::forbidden());
    }

    Ok(post)
}

#[track_caller]
pub(crate) fn post_not_found(slug: &str) -> ApiError {
    ApiError::not_found(format!("Blog post '{slug}' not found"))
}
