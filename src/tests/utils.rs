use crate::app::App;
use crate::config::AppConfig;
use crate::store::{seed::default_state, FixedClock, Store};
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use http::Method;
use std::io::Read;

pub const TEST_PASSCODE: &str = "letmein";

/// Fresh app over the seed data with a fixed clock (2026-07-04 08:30:00).
pub fn test_app() -> App {
    let now = NaiveDate::from_ymd_opt(2026, 7, 4)
        .and_then(|d| d.and_hms_opt(8, 30, 0))
        .expect("valid test date");
    let config = AppConfig {
        admin_passcode: TEST_PASSCODE.to_string(),
        ..AppConfig::default()
    };
    App::new(config, Store::new(default_state(), Box::new(FixedClock(now))))
}

pub fn get(uri: &str, session: Option<&str>) -> Request {
    request(Method::GET, uri, session, Body::empty(), None)
}

pub fn post_form(uri: &str, session: Option<&str>, form: &str) -> Request {
    request(
        Method::POST,
        uri,
        session,
        Body::from(form.as_bytes().to_vec()),
        Some("application/x-www-form-urlencoded"),
    )
}

pub fn post_json(uri: &str, session: Option<&str>, json: &str) -> Request {
    request(
        Method::POST,
        uri,
        session,
        Body::from(json.as_bytes().to_vec()),
        Some("application/json"),
    )
}

fn request(
    method: Method,
    uri: &str,
    session: Option<&str>,
    body: Body,
    content_type: Option<&str>,
) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(token) = session {
        builder = builder.header("Cookie", format!("session={token}"));
    }
    if let Some(ct) = content_type {
        builder = builder.header("Content-Type", ct);
    }
    builder.body(body).unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn location(resp: &Response) -> &str {
    resp.headers()
        .get("Location")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
}

/// Sign in through the login form and return the session token from the
/// `Set-Cookie` header.
pub fn login(app: &App) -> String {
    let resp = crate::router::handle(
        post_form("/login", None, &format!("passcode={TEST_PASSCODE}")),
        app,
    )
    .expect("login handled");
    assert_eq!(resp.status(), 302);

    let cookie = resp
        .headers()
        .get("Set-Cookie")
        .and_then(|v| v.to_str().ok())
        .expect("session cookie set");
    cookie
        .split(';')
        .next()
        .and_then(|pair| pair.strip_prefix("session="))
        .expect("session=<token>")
        .to_string()
}
