use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {message} {location}")]
    PasswordHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session store error: {message} {location}")]
    SessionStore {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid session payload: {message} {location}")]
    InvalidSession {
        message: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
