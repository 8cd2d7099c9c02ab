use blog_core::{BlogPost, Role, User};
use blog_db::{BlogPostRepository, UserRepository};

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates a test User with a placeholder hash
pub fn create_test_user(email: &str, role: Role) -> User {
    let mut user = User::new(
        "Test User".to_string(),
        email.to_string(),
        "$2b$04$placeholderplaceholderplaceholderplaceholderplacehol".to_string(),
    );
    user.role = role;
    user
}

/// Creates a test BlogPost with a slug derived from the title
pub fn create_test_post(author_id: Uuid, title: &str) -> BlogPost {
    BlogPost::new(
        blog_core::slugify(title),
        title.to_string(),
        format!("Body of {title}"),
        author_id,
    )
}

pub async fn insert_user(pool: &SqlitePool, email: &str, role: Role) -> User {
    let user = create_test_user(email, role);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub async fn insert_post(pool: &SqlitePool, author_id: Uuid, title: &str) -> BlogPost {
    let post = create_test_post(author_id, title);
    BlogPostRepository::new(pool.clone())
        .create(&post)
        .await
        .expect("Failed to create test post");
    post
}
