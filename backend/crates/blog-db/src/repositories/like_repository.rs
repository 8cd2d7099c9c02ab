use crate::Result as DbErrorResult;

use blog_core::Like;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct LikeRepository {
    pool: SqlitePool,
}

impl LikeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Flip the user's like on a post. Returns whether the post is now liked.
    pub async fn toggle(&self, blog_post_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM likes WHERE blog_post_id = ? AND user_id = ?")
            .bind(blog_post_id.to_string())
            .bind(user_id.to_string())
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let liked = if removed == 0 {
            let like = Like::new(blog_post_id, user_id);
            sqlx::query("INSERT INTO likes (blog_post_id, user_id, created_at) VALUES (?, ?, ?)")
                .bind(like.blog_post_id.to_string())
                .bind(like.user_id.to_string())
                .bind(like.created_at.timestamp())
                .execute(&mut *tx)
                .await?;
            true
        } else {
            false
        };

        tx.commit().await?;
        Ok(liked)
    }

    pub async fn exists(&self, blog_post_id: Uuid, user_id: Uuid) -> DbErrorResult<bool> {
        let found: Option<(i64,)> =
            sqlx::query_as("SELECT 1 FROM likes WHERE blog_post_id = ? AND user_id = ?")
                .bind(blog_post_id.to_string())
                .bind(user_id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        Ok(found.is_some())
    }

    pub async fn count_for_post(&self, blog_post_id: Uuid) -> DbErrorResult<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM likes WHERE blog_post_id = ?")
            .bind(blog_post_id.to_string())
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
