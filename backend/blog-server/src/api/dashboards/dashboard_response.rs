use crate::{BlogPostDto, IdentityDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub user: IdentityDto,
    pub posts: Vec<BlogPostDto>,
}
