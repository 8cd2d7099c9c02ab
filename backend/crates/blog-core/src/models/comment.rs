use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub blog_post_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(blog_post_id: Uuid, user_id: Uuid, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            blog_post_id,
            user_id,
            content,
            created_at: Utc::now(),
        }
    }
}

/// A comment joined with its author's display name
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentListing {
    pub comment: Comment,
    pub author_name: String,
}
