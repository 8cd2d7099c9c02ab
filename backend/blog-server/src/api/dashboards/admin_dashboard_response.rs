use crate::{IdentityDto, UserDto};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct AdminDashboardResponse {
    pub user: IdentityDto,
    pub users: Vec<UserDto>,
}
