//! Account and session lifecycle handlers

use crate::middleware::session_cookie;
use crate::{
    ApiError, ApiResult, AppState, CurrentIdentity, IdentityResponse, LoginRequest,
    LoginResponse, MessageResponse, SignupRequest, UserResponse,
};

use blog_auth::Session;
use blog_core::validation::{normalize_email, normalize_name, validate_password};
use blog_core::{Identity, User};
use blog_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, HeaderName, HeaderValue, StatusCode, header::SET_COOKIE},
};
use log::{info, warn};

type WithCookie<T> = ([(HeaderName, HeaderValue); 1], Json<T>);

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let name = normalize_name(&req.name)?;
    let email = normalize_email(&req.email)?;
    validate_password(&req.password, state.auth.min_password_length)?;

    let password_hash = state.hasher.hash(&req.password).await?;
    let user = User::new(name, email, password_hash);

    let repo = UserRepository::new(state.pool.clone());
    match repo.create(&user).await {
        Ok(()) => {}
        Err(e) if e.is_unique_violation() => {
            return Err(ApiError::conflict("Email already in use"));
        }
        Err(e) => return Err(e.into()),
    }

    info!("Created account {} ({})", user.id, user.role);

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}

/// POST /login
///
/// Any session the client already holds is destroyed before a new one is
/// issued, so a login never inherits a previous identity.
pub async fn login(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> ApiResult<WithCookie<LoginResponse>> {
    let email = req.email.trim().to_lowercase();

    let repo = UserRepository::new(state.pool.clone());
    let Some(user) = repo.find_by_email(&email).await? else {
        return Err(ApiError::invalid_credentials());
    };

    if !state.hasher.verify(&req.password, &user.password_hash).await? {
        return Err(ApiError::invalid_credentials());
    }

    if let Some(previous) = session_cookie::read_token(&headers, &state.session.cookie_name)
        && let Err(e) = state.sessions.destroy(&previous).await
    {
        warn!("Failed to destroy previous session {}: {}", previous, e);
    }

    let identity = Identity::from(&user);
    let session = Session::authenticated(identity.clone(), state.session_ttl()?);
    state.sessions.save(&session).await?;

    info!("User {} logged in as {}", identity.id, identity.role);

    let cookie = session_cookie::issue(&state.session, &session.token)?;
    let redirect_to = identity.role.landing_path().to_string();

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: identity.into(),
            redirect_to,
        }),
    ))
}

/// POST /logout
///
/// Succeeds without a session too; the cookie is cleared either way.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<WithCookie<MessageResponse>> {
    if let Some(token) = session_cookie::read_token(&headers, &state.session.cookie_name) {
        state.sessions.destroy(&token).await?;
        info!("Session {} logged out", token);
    }

    Ok((
        [(SET_COOKIE, session_cookie::clear(&state.session)?)],
        Json(MessageResponse {
            message: "Logged out".to_string(),
        }),
    ))
}

/// GET /me
pub async fn me(CurrentIdentity(identity): CurrentIdentity) -> Json<IdentityResponse> {
    Json(IdentityResponse {
        user: identity.into(),
    })
}
