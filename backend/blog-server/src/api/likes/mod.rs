pub mod like_response;
pub mod likes;
