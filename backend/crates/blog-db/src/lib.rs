pub mod error;
pub mod repositories;
pub mod rows;
pub mod session;

pub use error::{DbError, Result};
pub use repositories::blog_post_repository::BlogPostRepository;
pub use repositories::comment_repository::CommentRepository;
pub use repositories::like_repository::LikeRepository;
pub use repositories::user_repository::UserRepository;
pub use session::sqlite_session_store::SqliteSessionStore;

use sqlx::SqlitePool;
use sqlx::migrate::Migrator;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply all pending schema migrations
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await.map_err(DbError::from)
}
