use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
