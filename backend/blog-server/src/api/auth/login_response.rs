use crate::IdentityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: IdentityDto,
    /// Dashboard for the user's role
    pub redirect_to: String,
}
