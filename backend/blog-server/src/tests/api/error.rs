use crate::ApiError;

use blog_auth::GateRejection;
use blog_core::CoreError;
use blog_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("Page not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "Page not found");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "title cannot be empty".into(),
        field: Some("title".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn test_gate_rejections_map_to_401_and_403_bodies() {
    let (status, json) = body_json(GateRejection::Unauthenticated.into()).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHENTICATED");
    assert_eq!(json["error"]["message"], "You need to log in first.");

    let (status, json) = body_json(GateRejection::Forbidden.into()).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
    assert_eq!(json["error"]["message"], "Access Denied");
}

#[tokio::test]
async fn test_invalid_credentials_message_is_generic() {
    let (status, json) = body_json(ApiError::invalid_credentials()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"]["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let (status, json) = body_json(ApiError::internal("disk on fire at /var/db")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert!(!json["error"]["message"].as_str().unwrap().contains("/var/db"));
}

#[test]
fn test_invalid_role_maps_to_bad_request() {
    let error = ApiError::from(CoreError::InvalidRole {
        value: "root".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("root"));
}

#[test]
fn test_unique_violation_maps_to_conflict() {
    let error = ApiError::from(DbError::UniqueViolation {
        message: "UNIQUE constraint failed: users.email".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_row_not_found_maps_to_404_and_other_db_errors_to_500() {
    let missing = ApiError::from(DbError::from(sqlx::Error::RowNotFound));
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);

    let corrupt = ApiError::from(DbError::decode("role", "bad tag"));
    assert_eq!(corrupt.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_uuid_error_maps_to_validation() {
    let error = ApiError::from(uuid::Uuid::parse_str("nope").unwrap_err());

    assert_eq!(error.status(), StatusCode::BAD_REQUEST);
}
