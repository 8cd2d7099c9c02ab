pub mod blog_post_repository;
pub mod comment_repository;
pub mod like_repository;
pub mod user_repository;
