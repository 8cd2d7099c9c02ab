pub mod admin;
pub mod update_role_request;
