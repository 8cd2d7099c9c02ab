pub mod blog_post_dto;
pub mod blog_post_list_response;
pub mod blog_post_response;
pub mod blogs;
pub mod create_blog_post_request;
pub mod update_blog_post_request;
