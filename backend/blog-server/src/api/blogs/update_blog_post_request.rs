use serde::Deserialize;

/// Omitted fields keep their current value. The slug never changes.
#[derive(Debug, Deserialize)]
pub struct UpdateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}
