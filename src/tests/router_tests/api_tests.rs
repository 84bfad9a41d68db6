use crate::router::handle;
use crate::tests::utils::{body_string, get, login, post_json, test_app};
use serde_json::Value;

#[test]
fn state_snapshot_is_camel_case_json_without_passwords() {
    let app = test_app();

    let resp = handle(get("/api/state", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["regions"].as_array().unwrap().len(), 6);
    assert_eq!(json["commodities"][0]["id"], "palm-oil");
    assert_eq!(json["commodities"][0]["baseUnit"], "25L keg");
    assert!(json["commodities"][0]["prices"][0]["lastUpdated"].is_string());
    assert!(json["hero"]["ctaText"].is_string());
    assert!(json["activityLog"].as_array().unwrap().is_empty());
    assert_eq!(json["users"][0]["role"], "admin");
    assert!(json["users"][0].get("password").is_none());
}

#[test]
fn dispatch_requires_session() {
    let app = test_app();

    let res = handle(
        post_json("/api/dispatch", None, r#"{"type":"ADD_REGION","region":"Plateau"}"#),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::Unauthorized(_))));
    assert!(!app.snapshot().unwrap().has_region("Plateau"));
}

#[test]
fn dispatch_applies_action_and_returns_state() {
    let app = test_app();
    let token = login(&app);

    let resp = handle(
        post_json(
            "/api/dispatch",
            Some(&token),
            r#"{"type":"UPDATE_COMMODITY","commodityId":"cocoa","fields":{"name":"Cocoa Beans"}}"#,
        ),
        &app,
    )
    .unwrap();

    let json: Value = serde_json::from_str(&body_string(resp)).unwrap();
    assert_eq!(json["commodities"][1]["name"], "Cocoa Beans");
    assert_eq!(
        json["activityLog"][0]["action"],
        "Updated commodity details for cocoa"
    );
}

#[test]
fn dispatch_of_unknown_type_is_identity() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    let resp = handle(
        post_json("/api/dispatch", Some(&token), r#"{"type":"DROP_TABLES"}"#),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(app.snapshot().unwrap(), before);
}

#[test]
fn malformed_action_is_bad_request() {
    let app = test_app();
    let token = login(&app);

    let res = handle(post_json("/api/dispatch", Some(&token), "{not json"), &app);
    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));
}

#[test]
fn negative_price_action_is_bad_request() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    let single = r#"{"type":"UPDATE_PRICE","commodityId":"cocoa","region":"Oyo","price":-50,"unit":"t"}"#;
    let res = handle(post_json("/api/dispatch", Some(&token), single), &app);
    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));

    let bulk = r#"{"type":"BULK_UPDATE","commodityId":"maize","updates":[{"region":"Kano","price":10,"unit":"bag"},{"region":"Oyo","price":-1,"unit":"bag"}]}"#;
    let res = handle(post_json("/api/dispatch", Some(&token), bulk), &app);
    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));

    assert_eq!(app.snapshot().unwrap(), before);
}

#[test]
fn eleven_logged_actions_keep_ten() {
    let app = test_app();
    let token = login(&app); // first log entry

    for i in 0..10 {
        handle(
            post_json(
                "/api/dispatch",
                Some(&token),
                &format!(r#"{{"type":"ADD_LOG","text":"note {i}"}}"#),
            ),
            &app,
        )
        .unwrap();
    }

    let log = app.snapshot().unwrap().activity_log;
    assert_eq!(log.len(), 10);
    assert_eq!(log[0].action, "note 9");
    assert_eq!(log[9].action, "note 0");
    assert!(log.iter().all(|e| e.action != "Admin signed in"));
}
