use blog_core::{Identity, Role};

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            role: i.role,
        }
    }
}
