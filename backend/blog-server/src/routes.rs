use crate::middleware::enforce_gates::enforce_gates;
use crate::middleware::resolve_session::resolve_session;
use crate::{
    AppState, admin_dashboard, author_dashboard, create_blog_post, create_comment,
    delete_blog_post, delete_comment, get_blog_post, get_settings, health, home, list_blog_posts,
    list_comments, login, logout, me, page_not_found, signup, toggle_like, update_blog_post,
    update_settings, update_user_role, user_dashboard,
};

use blog_auth::GateChain;
use blog_core::Role;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    middleware::from_fn_with_state,
    routing::{delete, get, post, put},
};
use tower_http::services::ServeDir;

/// Build the application router with all endpoints.
///
/// Gate chains are attached with `route_layer`, per route group or per
/// method where a path mixes public and protected methods. Session
/// resolution wraps everything, so gates always see the resolved session.
pub fn build_router(state: AppState) -> Router {
    let authenticated = GateChain::authenticated();
    let writers = GateChain::protected(&[Role::Author, Role::Admin]);

    let public = Router::new()
        .route("/", get(home))
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/logout", post(logout));

    let members = Router::new()
        .route("/me", get(me))
        .route("/setting", get(get_settings).put(update_settings))
        .route("/comments/{id}", delete(delete_comment))
        .route("/blog/{slug}/like", post(toggle_like))
        .route_layer(from_fn_with_state(authenticated.clone(), enforce_gates));

    let admin = Router::new()
        .route("/admin", get(admin_dashboard))
        .route("/admin/users/{id}/role", put(update_user_role))
        .route_layer(from_fn_with_state(
            GateChain::protected(&[Role::Admin]),
            enforce_gates,
        ));

    let author = Router::new()
        .route("/author", get(author_dashboard))
        .route_layer(from_fn_with_state(
            GateChain::protected(&[Role::Author]),
            enforce_gates,
        ));

    let reader = Router::new()
        .route("/user", get(user_dashboard))
        .route_layer(from_fn_with_state(
            GateChain::protected(&[Role::User]),
            enforce_gates,
        ));

    // Paths whose GET is public but whose writes are gated
    let blogs = Router::new()
        .route(
            "/blogs",
            get(list_blog_posts).merge(
                post(create_blog_post)
                    .route_layer(from_fn_with_state(writers.clone(), enforce_gates)),
            ),
        )
        .route(
            "/blog/{slug}",
            get(get_blog_post).merge(
                put(update_blog_post)
                    .delete(delete_blog_post)
                    .route_layer(from_fn_with_state(writers, enforce_gates)),
            ),
        )
        .route(
            "/blog/{slug}/comments",
            get(list_comments).merge(
                post(create_comment).route_layer(from_fn_with_state(authenticated, enforce_gates)),
            ),
        );

    let static_files =
        ServeDir::new(&state.static_dir).not_found_service(page_not_found.into_service());

    Router::new()
        .merge(public)
        .merge(members)
        .merge(admin)
        .merge(author)
        .merge(reader)
        .merge(blogs)
        .fallback_service(static_files)
        .layer(from_fn_with_state(state.clone(), resolve_session))
        .with_state(state)
}
