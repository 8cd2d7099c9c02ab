use crate::Result as DbErrorResult;
use crate::rows::{BlogPostListingRow, BlogPostRow, convert_all};

use blog_core::{BlogPost, BlogPostListing, slug};

use sqlx::SqlitePool;
use uuid::Uuid;

const LISTING_SELECT: &str = r#"
    SELECT p.id, p.slug, p.title, p.content, p.author_id, p.created_at, p.updated_at,
           u.name AS author_name,
           (SELECT COUNT(*) FROM likes l WHERE l.blog_post_id = p.id) AS like_count,
           (SELECT COUNT(*) FROM comments c WHERE c.blog_post_id = p.id) AS comment_count
    FROM blog_posts p
    JOIN users u ON u.id = p.author_id
"#;

pub struct BlogPostRepository {
    pool: SqlitePool,
}

impl BlogPostRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, post: &BlogPost) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO blog_posts (id, slug, title, content, author_id, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(post.id.to_string())
        .bind(&post.slug)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author_id.to_string())
        .bind(post.created_at.timestamp())
        .bind(post.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn slug_exists(&self, slug: &str) -> DbErrorResult<bool> {
        let found: Option<(i64,)> = sqlx::query_as("SELECT 1 FROM blog_posts WHERE slug = ?")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// First free slug among `base`, `base-2`, `base-3`, …
    pub async fn available_slug(&self, base: &str) -> DbErrorResult<String> {
        if !self.slug_exists(base).await? {
            return Ok(base.to_string());
        }

        let mut n = 2;
        loop {
            let candidate = slug::with_suffix(base, n);
            if !self.slug_exists(&candidate).await? {
                return Ok(candidate);
            }
            n += 1;
        }
    }

    pub async fn find_by_slug(&self, slug: &str) -> DbErrorResult<Option<BlogPost>> {
        let row: Option<BlogPostRow> = sqlx::query_as(
            r#"
              SELECT id, slug, title, content, author_id, created_at, updated_at
              FROM blog_posts
              WHERE slug = ?
              "#,
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;

        row.map(BlogPost::try_from).transpose()
    }

    pub async fn find_listing_by_slug(&self, slug: &str) -> DbErrorResult<Option<BlogPostListing>> {
        let row: Option<BlogPostListingRow> =
            sqlx::query_as(&format!("{LISTING_SELECT} WHERE p.slug = ?"))
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;

        row.map(BlogPostListing::try_from).transpose()
    }

    /// Every post, newest first
    pub async fn list(&self) -> DbErrorResult<Vec<BlogPostListing>> {
        let rows: Vec<BlogPostListingRow> = sqlx::query_as(&format!(
            "{LISTING_SELECT} ORDER BY p.created_at DESC, p.rowid DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        convert_all(rows)
    }

    /// One author's posts, newest first
    pub async fn list_by_author(&self, author_id: Uuid) -> DbErrorResult<Vec<BlogPostListing>> {
        let rows: Vec<BlogPostListingRow> = sqlx::query_as(&format!(
            "{LISTING_SELECT} WHERE p.author_id = ? ORDER BY p.created_at DESC, p.rowid DESC"
        ))
        .bind(author_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        convert_all(rows)
    }

    /// Title and content only; slug and author are fixed at creation
    pub async fn update(&self, post: &BlogPost) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE blog_posts
              SET title = ?, content = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.updated_at.timestamp())
        .bind(post.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Removes the post along with its comments and likes
    pub async fn delete(&self, id: Uuid) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
