use crate::middleware::session_cookie::{clear, issue, read_token};

use blog_auth::SessionToken;
use blog_config::SessionConfig;

use cookie::time::{Duration, OffsetDateTime};
use cookie::{Cookie, SameSite};
use http::HeaderMap;
use http::header::{COOKIE, HeaderValue};

fn headers(cookies: &[&str]) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for cookie in cookies {
        headers.append(COOKIE, HeaderValue::from_str(cookie).unwrap());
    }
    headers
}

fn parsed(value: &HeaderValue) -> Cookie<'static> {
    Cookie::parse(value.to_str().unwrap().to_owned()).unwrap()
}

#[test]
fn test_read_token_finds_named_cookie_among_others() {
    let token = SessionToken::generate();
    let headers = headers(&[&format!("theme=dark; user_session={}; lang=en", token.as_str())]);

    assert_eq!(read_token(&headers, "user_session"), Some(token));
}

#[test]
fn test_read_token_across_multiple_cookie_headers() {
    let token = SessionToken::generate();
    let headers = headers(&["theme=dark", &format!("user_session={}", token.as_str())]);

    assert_eq!(read_token(&headers, "user_session"), Some(token));
}

#[test]
fn test_read_token_accepts_quoted_value_after_odd_pairs() {
    let token = SessionToken::generate();
    let headers = headers(&[&format!("a=b=c; user_session=\"{}\"", token.as_str())]);

    assert_eq!(read_token(&headers, "user_session"), Some(token));
}

#[test]
fn test_read_token_ignores_malformed_values() {
    let headers = headers(&["user_session=not-a-token"]);

    assert_eq!(read_token(&headers, "user_session"), None);
}

#[test]
fn test_read_token_skips_bad_duplicate_for_good_one() {
    let token = SessionToken::generate();
    let headers = headers(&[&format!("user_session=junk; user_session={}", token.as_str())]);

    assert_eq!(read_token(&headers, "user_session"), Some(token));
}

#[test]
fn test_read_token_requires_exact_name() {
    let token = SessionToken::generate();
    let headers = headers(&[&format!("xuser_session={}", token.as_str())]);

    assert_eq!(read_token(&headers, "user_session"), None);
    assert_eq!(read_token(&HeaderMap::new(), "user_session"), None);
}

#[test]
fn test_issue_sets_http_only_lax_and_max_age() {
    let config = SessionConfig::default();
    let token = SessionToken::generate();

    let cookie = parsed(&issue(&config, &token).unwrap());

    assert_eq!(cookie.name(), "user_session");
    assert_eq!(cookie.value(), token.as_str());
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(cookie.max_age(), Some(Duration::seconds(7200)));
    assert_ne!(cookie.secure(), Some(true));
}

#[test]
fn test_issued_cookie_reads_back_as_token() {
    let config = SessionConfig::default();
    let token = SessionToken::generate();
    let issued = parsed(&issue(&config, &token).unwrap());

    let headers = headers(&[&issued.stripped().to_string()]);

    assert_eq!(read_token(&headers, &config.cookie_name), Some(token));
}

#[test]
fn test_secure_flag_follows_config() {
    let config = SessionConfig {
        secure_cookie: true,
        ..SessionConfig::default()
    };

    let issued = parsed(&issue(&config, &SessionToken::generate()).unwrap());
    let cleared = parsed(&clear(&config).unwrap());

    assert_eq!(issued.secure(), Some(true));
    assert_eq!(cleared.secure(), Some(true));
}

#[test]
fn test_clear_expires_cookie() {
    let value = clear(&SessionConfig::default()).unwrap();
    let cookie = parsed(&value);

    assert!(value.to_str().unwrap().starts_with("user_session=;"));
    assert_eq!(cookie.value(), "");
    assert_eq!(cookie.path(), Some("/"));
    assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    let expires = cookie.expires_datetime().unwrap();
    assert!(expires < OffsetDateTime::now_utc());
}
