use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LikeResponse {
    /// Whether the caller likes the post after the toggle
    pub liked: bool,
    pub likes: i64,
}
