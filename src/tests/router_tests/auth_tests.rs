use crate::router::handle;
use crate::tests::utils::{body_string, get, location, login, post_form, test_app};

#[test]
fn login_page_loads_successfully() {
    let app = test_app();

    let resp = handle(get("/login", None), &app).expect("Failed to handle request");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Admin sign in"));
    assert!(body.contains("form"));
}

#[test]
fn wrong_passcode_is_rejected() {
    let app = test_app();

    let resp = handle(post_form("/login", None, "passcode=guess"), &app).unwrap();

    assert_eq!(resp.status(), 401);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert!(body_string(resp).contains("not right"));
    assert!(app.snapshot().unwrap().activity_log.is_empty());
}

#[test]
fn correct_passcode_starts_privileged_session() {
    let app = test_app();

    let token = login(&app);

    assert!(app.is_privileged(Some(&token)).unwrap());
    let state = app.snapshot().unwrap();
    assert_eq!(state.activity_log[0].action, "Admin signed in");
    assert_eq!(state.activity_log[0].timestamp, "2026-07-04 08:30:00");

    // already signed in: the login page bounces to admin
    let resp = handle(get("/login", Some(&token)), &app).unwrap();
    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin");
}

#[test]
fn logout_ends_session() {
    let app = test_app();
    let token = login(&app);

    let resp = handle(post_form("/logout", Some(&token), ""), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/");
    let cookie = resp.headers().get("Set-Cookie").unwrap().to_str().unwrap();
    assert!(cookie.contains("Max-Age=0"));
    assert!(!app.is_privileged(Some(&token)).unwrap());
    assert_eq!(
        app.snapshot().unwrap().activity_log[0].action,
        "Admin signed out"
    );
}

#[test]
fn logout_without_session_does_not_log() {
    let app = test_app();

    let resp = handle(post_form("/logout", None, ""), &app).unwrap();

    assert_eq!(resp.status(), 302);
    assert!(app.snapshot().unwrap().activity_log.is_empty());
}
