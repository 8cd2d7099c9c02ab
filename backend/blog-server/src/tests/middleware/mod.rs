mod enforce_gates;
mod session_cookie;
