//! Input normalization shared by signup, settings and post handlers.

use crate::{
    CoreError, MAX_COMMENT_LENGTH, MAX_CONTENT_LENGTH, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH,
    MAX_PASSWORD_BYTES, MAX_TITLE_LENGTH, Result as CoreErrorResult,
};

use std::panic::Location;

use error_location::ErrorLocation;

#[track_caller]
fn invalid(field: &str, message: impl Into<String>) -> CoreError {
    CoreError::Validation {
        message: message.into(),
        field: Some(field.to_string()),
        location: ErrorLocation::from(Location::caller()),
    }
}

/// Trim and lowercase an email address
#[track_caller]
pub fn normalize_email(email: &str) -> CoreErrorResult<String> {
    let email = email.trim().to_lowercase();

    if email.is_empty() {
        return Err(invalid("email", "email cannot be empty"));
    }
    if email.len() > MAX_EMAIL_LENGTH {
        return Err(invalid("email", "email exceeds maximum length"));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(email),
        _ => Err(invalid("email", "email must look like name@domain")),
    }
}

#[track_caller]
pub fn normalize_name(name: &str) -> CoreErrorResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(invalid("name", "name cannot be empty"));
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(invalid(
            "name",
            format!("name exceeds {MAX_NAME_LENGTH} characters"),
        ));
    }
    Ok(name.to_string())
}

#[track_caller]
pub fn validate_password(password: &str, min_length: usize) -> CoreErrorResult<()> {
    if password.chars().count() < min_length {
        return Err(invalid(
            "password",
            format!("password must be at least {min_length} characters"),
        ));
    }
    if password.len() > MAX_PASSWORD_BYTES {
        return Err(invalid(
            "password",
            format!("password must be at most {MAX_PASSWORD_BYTES} bytes"),
        ));
    }
    Ok(())
}

#[track_caller]
pub fn normalize_title(title: &str) -> CoreErrorResult<String> {
    let title = title.trim();

    if title.is_empty() {
        return Err(invalid("title", "title cannot be empty"));
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(invalid(
            "title",
            format!("title exceeds {MAX_TITLE_LENGTH} characters"),
        ));
    }
    Ok(title.to_string())
}

#[track_caller]
pub fn validate_content(content: &str) -> CoreErrorResult<()> {
    if content.trim().is_empty() {
        return Err(invalid("content", "content cannot be empty"));
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(invalid("content", "content exceeds maximum length"));
    }
    Ok(())
}

#[track_caller]
pub fn normalize_comment(content: &str) -> CoreErrorResult<String> {
    let content = content.trim();

    if content.is_empty() {
        return Err(invalid("content", "comment cannot be empty"));
    }
    if content.chars().count() > MAX_COMMENT_LENGTH {
        return Err(invalid(
            "content",
            format!("comment exceeds {MAX_COMMENT_LENGTH} characters"),
        ));
    }
    Ok(content.to_string())
}
