use blog_core::{BlogPost, BlogPostListing};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BlogPostDto {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub content: String,
    pub author_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    pub likes: i64,
    pub comments: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<BlogPostListing> for BlogPostDto {
    fn from(listing: BlogPostListing) -> Self {
        let mut dto = Self::from(listing.post);
        dto.author_name = Some(listing.author_name);
        dto.likes = listing.like_count;
        dto.comments = listing.comment_count;
        dto
    }
}

impl From<BlogPost> for BlogPostDto {
    fn from(p: BlogPost) -> Self {
        Self {
            id: p.id.to_string(),
            slug: p.slug,
            title: p.title,
            content: p.content,
            author_id: p.author_id.to_string(),
            author_name: None,
            likes: 0,
            comments: 0,
            created_at: p.created_at.timestamp(),
            updated_at: p.updated_at.timestamp(),
        }
    }
}
