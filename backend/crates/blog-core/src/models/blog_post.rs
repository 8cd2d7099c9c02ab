use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub author_id: Uuid,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    pub fn new(slug: String, title: String, content: String, author_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug,
            title,
            content,
            author_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A post joined with its author's name and engagement counters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListing {
    pub post: BlogPost,
    pub author_name: String,
    pub like_count: i64,
    pub comment_count: i64,
}
