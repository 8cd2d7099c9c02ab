use crate::Result as DbErrorResult;
use crate::rows::{CommentListingRow, CommentRow, convert_all};

use blog_core::{Comment, CommentListing};

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct CommentRepository {
    pool: SqlitePool,
}

impl CommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, comment: &Comment) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO comments (id, blog_post_id, user_id, content, created_at)
              VALUES (?, ?, ?, ?, ?)
              "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.blog_post_id.to_string())
        .bind(comment.user_id.to_string())
        .bind(&comment.content)
        .bind(comment.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Comment>> {
        let row: Option<CommentRow> = sqlx::query_as(
            r#"
              SELECT id, blog_post_id, user_id, content, created_at
              FROM comments
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Comment::try_from).transpose()
    }

    /// Comments on a post, oldest first
    pub async fn list_for_post(&self, blog_post_id: Uuid) -> DbErrorResult<Vec<CommentListing>> {
        let rows: Vec<CommentListingRow> = sqlx::query_as(
            r#"
              SELECT c.id, c.blog_post_id, c.user_id, c.content, c.created_at,
                     u.name AS author_name
              FROM comments c
              JOIN users u ON u.id = c.user_id
              WHERE c.blog_post_id = ?
              ORDER BY c.created_at ASC, c.rowid ASC
              "#,
        )
        .bind(blog_post_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        convert_all(rows)
    }

    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
