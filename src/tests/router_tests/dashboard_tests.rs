use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};

#[test]
fn dashboard_lists_every_seeded_commodity() {
    let app = test_app();

    let resp = handle(get("/", None), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Live agricultural commodity prices"));
    for name in ["Palm Oil", "Cocoa", "Ginger", "Paddy Rice", "Maize", "Soybean"] {
        assert!(body.contains(name), "missing {name}");
    }
    assert!(body.contains("Admin login"));
    assert!(!body.contains("href=\"/admin\""));
}

#[test]
fn search_filters_cards() {
    let app = test_app();

    let body = body_string(handle(get("/?q=cocoa", None), &app).unwrap());

    assert!(body.contains("/commodities/cocoa"));
    assert!(!body.contains("/commodities/maize"));
}

#[test]
fn search_without_hits_says_so() {
    let app = test_app();

    let body = body_string(handle(get("/?q=sorghum", None), &app).unwrap());

    assert!(body.contains("No commodities match"));
}

#[test]
fn region_tab_limits_rows() {
    let app = test_app();

    let body = body_string(handle(get("/?region=Kano", None), &app).unwrap());

    assert!(body.contains("<td>Kano</td>"));
    assert!(!body.contains("<td>Lagos</td>"));
}

#[test]
fn unknown_region_tab_shows_all_regions() {
    let app = test_app();

    let body = body_string(handle(get("/?region=Atlantis", None), &app).unwrap());

    assert!(body.contains("<td>Kano</td>"));
    assert!(body.contains("<td>Lagos</td>"));
}

#[test]
fn commodity_detail_page() {
    let app = test_app();

    let resp = handle(get("/commodities/ginger", None), &app).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Price history"));
    assert!(body.contains("2026-04"));
    assert!(body.contains("Benue"));
}

#[test]
fn unknown_commodity_is_not_found() {
    let app = test_app();

    let res = handle(get("/commodities/sorghum", None), &app);
    assert!(matches!(res, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn export_returns_spreadsheet() {
    let app = test_app();

    let resp = handle(get("/export/prices.xlsx", None), &app).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap(),
        crate::responses::xlsx::XLSX_CONTENT_TYPE
    );
    let disposition = resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(disposition.starts_with("attachment; filename=\"agri_prices_"));
}

#[test]
fn stylesheet_is_served() {
    let app = test_app();

    let resp = handle(get("/static/main.css", None), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains(".card"));
}
