pub mod api;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod middleware;
pub mod routes;
pub mod session_reaper;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    admin::{admin::update_user_role, update_role_request::UpdateRoleRequest},
    auth::{
        auth::{login, logout, me, signup},
        identity_response::IdentityResponse,
        login_request::LoginRequest,
        login_response::LoginResponse,
        signup_request::SignupRequest,
    },
    blogs::{
        blog_post_dto::BlogPostDto,
        blog_post_list_response::BlogPostListResponse,
        blog_post_response::BlogPostResponse,
        blogs::{
            create_blog_post, delete_blog_post, get_blog_post, list_blog_posts, update_blog_post,
        },
        create_blog_post_request::CreateBlogPostRequest,
        update_blog_post_request::UpdateBlogPostRequest,
    },
    comments::{
        comment_dto::CommentDto,
        comment_list_response::CommentListResponse,
        comment_response::CommentResponse,
        comments::{create_comment, delete_comment, list_comments},
        create_comment_request::CreateCommentRequest,
    },
    dashboards::{
        admin_dashboard_response::AdminDashboardResponse,
        dashboard_response::DashboardResponse,
        dashboards::{admin_dashboard, author_dashboard, user_dashboard},
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    extractors::{current_identity::CurrentIdentity, maybe_identity::MaybeIdentity},
    home::{HomeResponse, home, page_not_found},
    likes::{like_response::LikeResponse, likes::toggle_like},
    message_response::MessageResponse,
    settings::{
        settings::{get_settings, update_settings},
        update_settings_request::UpdateSettingsRequest,
    },
    users::{
        identity_dto::IdentityDto, user_dto::UserDto, user_response::UserResponse,
    },
};
pub use bootstrap::bootstrap_admin;
pub use middleware::resolve_session::ResolvedSession;
pub use session_reaper::spawn_session_reaper;
pub use state::AppState;

pub use crate::routes::build_router;
