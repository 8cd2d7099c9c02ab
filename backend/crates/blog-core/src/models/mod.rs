pub mod blog_post;
pub mod comment;
pub mod identity;
pub mod like;
pub mod role;
pub mod user;
