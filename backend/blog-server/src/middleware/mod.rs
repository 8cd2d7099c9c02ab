pub mod enforce_gates;
pub mod resolve_session;
pub mod session_cookie;
