pub mod auth;
pub mod identity_response;
pub mod login_request;
pub mod login_response;
pub mod signup_request;
