use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's like on one post. The pair is unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub blog_post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Like {
    pub fn new(blog_post_id: Uuid, user_id: Uuid) -> Self {
        Self {
            blog_post_id,
            user_id,
            created_at: Utc::now(),
        }
    }
}
