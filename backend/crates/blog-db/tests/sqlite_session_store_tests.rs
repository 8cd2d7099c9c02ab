mod common;

use common::create_test_pool;

use blog_auth::{AuthError, Session, SessionStore, SessionToken};
use blog_core::{Identity, Role};
use blog_db::SqliteSessionStore;

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

fn identity(role: Role) -> Identity {
    Identity {
        id: Uuid::new_v4(),
        name: "Session User".to_string(),
        email: "session@example.com".to_string(),
        role,
    }
}

#[tokio::test]
async fn given_saved_session_when_loaded_then_identity_round_trips() {
    // Given
    let store = SqliteSessionStore::new(create_test_pool().await);
    let session = Session::authenticated(identity(Role::Author), Duration::hours(2));

    // When
    store.save(&session).await.unwrap();
    let loaded = store.load(&session.token).await.unwrap().unwrap();

    // Then
    assert_that!(loaded.token, eq(&session.token));
    assert_that!(loaded.identity(), some(eq(session.identity().unwrap())));
    assert_that!(
        loaded.expires_at.timestamp_millis(),
        eq(session.expires_at.timestamp_millis())
    );
}

#[tokio::test]
async fn given_unknown_token_when_loaded_then_none() {
    let store = SqliteSessionStore::new(create_test_pool().await);
    assert_that!(store.load(&SessionToken::generate()).await.unwrap(), none());
}

#[tokio::test]
async fn given_expired_session_when_loaded_then_none_and_purged() {
    // Given
    let store = SqliteSessionStore::new(create_test_pool().await);
    let mut expired = Session::authenticated(identity(Role::User), Duration::hours(2));
    expired.expires_at = Utc::now() - Duration::seconds(5);
    let live = Session::authenticated(identity(Role::User), Duration::hours(2));
    store.save(&expired).await.unwrap();
    store.save(&live).await.unwrap();

    // When / Then
    assert_that!(store.load(&expired.token).await.unwrap(), none());
    assert_that!(store.purge_expired().await.unwrap(), eq(1));
    assert_that!(store.load(&live.token).await.unwrap(), some(anything()));
}

#[tokio::test]
async fn given_destroyed_session_when_loaded_then_none() {
    let store = SqliteSessionStore::new(create_test_pool().await);
    let session = Session::authenticated(identity(Role::User), Duration::hours(2));
    store.save(&session).await.unwrap();

    store.destroy(&session.token).await.unwrap();

    assert_that!(store.load(&session.token).await.unwrap(), none());
}

#[tokio::test]
async fn given_user_sessions_when_identity_refreshed_then_role_changes_everywhere() {
    // Given
    let store = SqliteSessionStore::new(create_test_pool().await);
    let user = identity(Role::User);
    let laptop = Session::authenticated(user.clone(), Duration::hours(2));
    let phone = Session::authenticated(user.clone(), Duration::hours(2));
    let stranger = Session::authenticated(identity(Role::User), Duration::hours(2));
    for session in [&laptop, &phone, &stranger] {
        store.save(session).await.unwrap();
    }

    // When
    let mut promoted = user.clone();
    promoted.role = Role::Admin;
    let touched = store.refresh_identity(&promoted).await.unwrap();

    // Then
    assert_that!(touched, eq(2));
    let reloaded = store.load(&phone.token).await.unwrap().unwrap();
    assert_that!(reloaded.identity().map(|i| i.role), some(eq(Role::Admin)));
    let other = store.load(&stranger.token).await.unwrap().unwrap();
    assert_that!(other.identity().map(|i| i.role), some(eq(Role::User)));
}

#[tokio::test]
async fn given_tampered_identity_role_when_loaded_then_invalid_session_error() {
    // Given
    let pool = create_test_pool().await;
    let store = SqliteSessionStore::new(pool.clone());
    let session = Session::authenticated(identity(Role::User), Duration::hours(2));
    store.save(&session).await.unwrap();
    sqlx::query("UPDATE sessions SET identity = replace(identity, '\"user\"', '\"root\"')")
        .execute(&pool)
        .await
        .unwrap();

    // When
    let result = store.load(&session.token).await;

    // Then
    assert!(matches!(result, Err(AuthError::InvalidSession { .. })));
}

#[tokio::test]
async fn given_session_saved_twice_when_loaded_then_latest_identity_wins() {
    let store = SqliteSessionStore::new(create_test_pool().await);
    let mut session = Session::authenticated(identity(Role::User), Duration::hours(2));
    store.save(&session).await.unwrap();

    let mut renamed = session.identity().unwrap().clone();
    renamed.name = "Renamed".to_string();
    session.refresh(renamed);
    store.save(&session).await.unwrap();

    let loaded = store.load(&session.token).await.unwrap().unwrap();
    assert_that!(loaded.identity().map(|i| i.name.clone()), some(eq("Renamed")));
}
