use crate::BlogPostDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BlogPostListResponse {
    pub posts: Vec<BlogPostDto>,
}
