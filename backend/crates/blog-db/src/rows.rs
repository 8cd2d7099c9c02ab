//! Raw SQLite rows and their conversion into domain models.
//!
//! Every id, timestamp and role is re-validated on the way out, so a
//! corrupted row surfaces as a `DbError` instead of a bogus model.

use crate::{DbError, Result as DbErrorResult};

use blog_core::{BlogPost, BlogPostListing, Comment, CommentListing, Role, User};

use std::str::FromStr;

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(value: &str, column: &'static str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::decode(column, e.to_string()))
}

#[track_caller]
pub(crate) fn parse_timestamp(secs: i64, column: &'static str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
        .ok_or_else(|| DbError::decode(column, format!("timestamp {secs} out of range")))
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid(&row.id, "users.id")?,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: Role::from_str(&row.role)?,
            created_at: parse_timestamp(row.created_at, "users.created_at")?,
            updated_at: parse_timestamp(row.updated_at, "users.updated_at")?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BlogPostRow {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = DbError;

    fn try_from(row: BlogPostRow) -> DbErrorResult<Self> {
        Ok(BlogPost {
            id: parse_uuid(&row.id, "blog_posts.id")?,
            slug: row.slug,
            title: row.title,
            content: row.content,
            author_id: parse_uuid(&row.author_id, "blog_posts.author_id")?,
            created_at: parse_timestamp(row.created_at, "blog_posts.created_at")?,
            updated_at: parse_timestamp(row.updated_at, "blog_posts.updated_at")?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct BlogPostListingRow {
    #[sqlx(flatten)]
    pub post: BlogPostRow,
    pub author_name: String,
    pub like_count: i64,
    pub comment_count: i64,
}

impl TryFrom<BlogPostListingRow> for BlogPostListing {
    type Error = DbError;

    fn try_from(row: BlogPostListingRow) -> DbErrorResult<Self> {
        Ok(BlogPostListing {
            post: BlogPost::try_from(row.post)?,
            author_name: row.author_name,
            like_count: row.like_count,
            comment_count: row.comment_count,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CommentRow {
    pub id: String,
    pub blog_post_id: String,
    pub user_id: String,
    pub content: String,
    pub created_at: i64,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DbError;

    fn try_from(row: CommentRow) -> DbErrorResult<Self> {
        Ok(Comment {
            id: parse_uuid(&row.id, "comments.id")?,
            blog_post_id: parse_uuid(&row.blog_post_id, "comments.blog_post_id")?,
            user_id: parse_uuid(&row.user_id, "comments.user_id")?,
            content: row.content,
            created_at: parse_timestamp(row.created_at, "comments.created_at")?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct CommentListingRow {
    #[sqlx(flatten)]
    pub comment: CommentRow,
    pub author_name: String,
}

impl TryFrom<CommentListingRow> for CommentListing {
    type Error = DbError;

    fn try_from(row: CommentListingRow) -> DbErrorResult<Self> {
        Ok(CommentListing {
            comment: Comment::try_from(row.comment)?,
            author_name: row.author_name,
        })
    }
}

/// Convert a batch of rows, failing on the first corrupt one
pub(crate) fn convert_all<R, T>(rows: Vec<R>) -> DbErrorResult<Vec<T>>
where
    T: TryFrom<R, Error = DbError>,
{
    rows.into_iter().map(T::try_from).collect()
}
