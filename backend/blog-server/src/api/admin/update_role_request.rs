use serde::Deserialize;

/// Raw role tag; parsed against the closed role set by the handler
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    pub role: String,
}
