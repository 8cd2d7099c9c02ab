pub mod admin;
pub mod auth;
pub mod blogs;
pub mod comments;
pub mod dashboards;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod home;
pub mod likes;
pub mod message_response;
pub mod settings;
pub mod users;
