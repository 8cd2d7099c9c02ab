//! Session cookie encoding. The cookie carries only the opaque token.

use blog_auth::SessionToken;
use blog_config::SessionConfig;

use cookie::time::Duration;
use cookie::{Cookie, SameSite};
use http::header::{COOKIE, HeaderMap, HeaderValue, InvalidHeaderValue};

/// First well-formed session token among the request's cookies.
///
/// Values that are not a token this server could have issued are skipped,
/// so garbage never reaches the session store.
pub fn read_token(headers: &HeaderMap, cookie_name: &str) -> Option<SessionToken> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value).filter_map(Result::ok))
        .filter(|cookie| cookie.name() == cookie_name)
        .find_map(|cookie| SessionToken::parse(cookie.value_trimmed()))
}

/// `Set-Cookie` value issuing `token` for the configured max age
pub fn issue(config: &SessionConfig, token: &SessionToken) -> Result<HeaderValue, InvalidHeaderValue> {
    let max_age = i64::try_from(config.max_age_secs).unwrap_or(i64::MAX);
    let cookie = session_cookie(config, token.as_str().to_owned())
        .max_age(Duration::seconds(max_age))
        .build();

    HeaderValue::from_str(&cookie.to_string())
}

/// `Set-Cookie` value telling the browser to drop the session cookie
pub fn clear(config: &SessionConfig) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = session_cookie(config, String::new()).build();
    cookie.make_removal();

    HeaderValue::from_str(&cookie.to_string())
}

fn session_cookie(config: &SessionConfig, value: String) -> cookie::CookieBuilder<'static> {
    Cookie::build((config.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .secure(config.secure_cookie)
        .same_site(SameSite::Lax)
}
