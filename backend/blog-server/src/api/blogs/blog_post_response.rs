use crate::BlogPostDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BlogPostResponse {
    pub post: BlogPostDto,
}
