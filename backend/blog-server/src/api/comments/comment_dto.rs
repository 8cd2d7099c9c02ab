use blog_core::{Comment, CommentListing};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommentDto {
    pub id: String,
    pub blog_post_id: String,
    pub user_id: String,
    pub author_name: String,
    pub content: String,
    pub created_at: i64,
}

impl CommentDto {
    pub fn new(c: Comment, author_name: String) -> Self {
        Self {
            id: c.id.to_string(),
            blog_post_id: c.blog_post_id.to_string(),
            user_id: c.user_id.to_string(),
            author_name,
            content: c.content,
            created_at: c.created_at.timestamp(),
        }
    }
}

impl From<CommentListing> for CommentDto {
    fn from(listing: CommentListing) -> Self {
        Self::new(listing.comment, listing.author_name)
    }
}
