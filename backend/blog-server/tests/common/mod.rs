#![allow(dead_code)]

//! Test infrastructure for blog-server API tests

use blog_auth::{MemorySessionStore, PasswordHasher};
use blog_config::Config;
use blog_core::{BlogPost, Role, User};
use blog_db::{BlogPostRepository, UserRepository};
use blog_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode, header},
};
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const PASSWORD: &str = "correct horse battery";

/// Create a test pool with in-memory SQLite
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(":memory:")
                .foreign_keys(true),
        )
        .await
        .expect("Failed to create test database");

    blog_db::migrate(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState over an in-memory database and session store, with the
/// cheapest bcrypt cost
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with(Arc::new(MemorySessionStore::new())).await
}

pub async fn create_test_app_state_with(
    sessions: Arc<dyn blog_auth::SessionStore>,
) -> AppState {
    let mut state = AppState::new(create_test_pool().await, sessions, &Config::default());
    state.hasher = PasswordHasher::new(4);
    state.static_dir = "does-not-exist".into();
    state
}

pub fn app(state: &AppState) -> Router {
    build_router(state.clone())
}

/// Insert a user with [`PASSWORD`] directly through the repository
pub async fn create_test_user(state: &AppState, email: &str, role: Role) -> User {
    let hash = state.hasher.hash(PASSWORD).await.unwrap();
    let mut user = User::new(format!("{role} {email}"), email.to_string(), hash);
    user.role = role;
    UserRepository::new(state.pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}

pub async fn create_test_post(state: &AppState, author: &User, title: &str) -> BlogPost {
    let post = BlogPost::new(
        blog_core::slugify(title),
        title.to_string(),
        format!("About {title}"),
        author.id,
    );
    BlogPostRepository::new(state.pool.clone())
        .create(&post)
        .await
        .expect("Failed to create test post");
    post
}

/// Log in through the API and return the `name=value` cookie pair
pub async fn login(app: &Router, email: &str, password: &str) -> String {
    let response = send(
        app,
        json_request("POST", "/login", None, serde_json::json!({ "email": email, "password": password })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK, "login failed for {email}");
    session_cookie(&response).expect("login did not set a cookie")
}

/// Create a user and log them in
pub async fn logged_in(state: &AppState, app: &Router, email: &str, role: Role) -> (User, String) {
    let user = create_test_user(state, email, role).await;
    let cookie = login(app, email, PASSWORD).await;
    (user, cookie)
}

/// `name=value` part of the response's Set-Cookie header
pub fn session_cookie<B>(response: &Response<B>) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)?
        .to_str()
        .ok()?
        .split(';')
        .next()
        .map(str::to_string)
}

pub fn request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn json_request(
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}
