pub mod error;
pub mod models;
pub mod slug;
pub mod validation;

pub use error::{CoreError, Result};
pub use models::blog_post::{BlogPost, BlogPostListing};
pub use models::comment::{Comment, CommentListing};
pub use models::identity::Identity;
pub use models::like::Like;
pub use models::role::Role;
pub use models::user::User;
pub use slug::slugify;

/// bcrypt only looks at the first 72 bytes of a password
pub const MAX_PASSWORD_BYTES: usize = 72;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MAX_TITLE_LENGTH: usize = 200;
pub const MAX_CONTENT_LENGTH: usize = 100_000;
pub const MAX_COMMENT_LENGTH: usize = 5_000;

#[cfg(test)]
mod tests;
