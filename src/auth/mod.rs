pub mod sessions;
pub mod token;

use astra::Request;

pub const SESSION_COOKIE: &str = "session";

/// Does the submitted passcode equal the configured one?
pub fn passcode_matches(submitted: &str, expected: &str) -> bool {
    token::digests_match(&token::digest(submitted), &token::digest(expected))
}

/// Raw session token from the request's `Cookie` header, if any.
pub fn session_token(req: &Request) -> Option<String> {
    req.headers()
        .get_all("Cookie")
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
        .filter(|v| !v.is_empty())
}

pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

pub fn cleared_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}
