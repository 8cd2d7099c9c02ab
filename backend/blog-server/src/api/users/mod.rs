pub mod identity_dto;
pub mod user_dto;
pub mod user_response;
