use crate::{CoreError, Role};

use std::str::FromStr;

#[test]
fn test_role_as_str() {
    assert_eq!(Role::Admin.as_str(), "admin");
    assert_eq!(Role::Author.as_str(), "author");
    assert_eq!(Role::User.as_str(), "user");
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("author").unwrap(), Role::Author);
    assert_eq!(Role::from_str("user").unwrap(), Role::User);
}

#[test]
fn test_role_from_str_is_case_sensitive() {
    assert!(matches!(
        Role::from_str("Admin"),
        Err(CoreError::InvalidRole { .. })
    ));
    assert!(Role::from_str("ADMIN").is_err());
    assert!(Role::from_str(" admin").is_err());
}

#[test]
fn test_role_from_str_rejects_unknown() {
    let err = Role::from_str("superuser").unwrap_err();
    assert!(err.to_string().contains("superuser"));
    assert!(Role::from_str("").is_err());
}

#[test]
fn test_role_default_is_user() {
    assert_eq!(Role::default(), Role::User);
}

#[test]
fn test_role_landing_paths() {
    assert_eq!(Role::Admin.landing_path(), "/admin");
    assert_eq!(Role::Author.landing_path(), "/author");
    assert_eq!(Role::User.landing_path(), "/user");
}

#[test]
fn test_role_serde_uses_lowercase_tags() {
    assert_eq!(serde_json::to_string(&Role::Author).unwrap(), "\"author\"");
    let role: Role = serde_json::from_str("\"admin\"").unwrap();
    assert_eq!(role, Role::Admin);
    assert!(serde_json::from_str::<Role>("\"root\"").is_err());
}
