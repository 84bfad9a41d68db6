use crate::router::handle;
use crate::tests::utils::{body_string, get, location, login, post_form, test_app};

#[test]
fn admin_requires_session() {
    let app = test_app();

    for req in [
        get("/admin", None),
        post_form("/admin/regions", None, "region=Plateau"),
        get("/admin", Some("forged-token")),
    ] {
        let resp = handle(req, &app).expect("Handler failed");
        assert_eq!(resp.status(), 302);
        assert_eq!(location(&resp), "/login");
    }
    assert!(!app.snapshot().unwrap().has_region("Plateau"));
}

#[test]
fn admin_page_loads_for_privileged_session() {
    let app = test_app();
    let token = login(&app);

    let resp = handle(get("/admin", Some(&token)), &app).expect("Handler failed");

    assert_eq!(resp.status(), 200, "Admin page should load");
    let body = body_string(resp);
    assert!(body.contains("Admin Dashboard"));
    assert!(body.contains("desk-editor"));
    assert!(body.contains("Admin signed in"));
    assert!(!body.contains("editor123"), "passwords must never render");
}

#[test]
fn admin_can_update_a_price() {
    let app = test_app();
    let token = login(&app);

    let resp = handle(
        post_form(
            "/admin/prices",
            Some(&token),
            "commodity_id=maize&region=Kano&price=41000&unit=100kg+bag&change=1.5",
        ),
        &app,
    )
    .unwrap();

    assert_eq!(resp.status(), 302);
    assert_eq!(location(&resp), "/admin");

    let state = app.snapshot().unwrap();
    let kano = state.commodity("maize").unwrap().price_in("Kano").unwrap();
    assert_eq!(kano.price, 41000.0);
    assert_eq!(kano.unit, "100kg bag");
    assert_eq!(kano.change, 1.5);
    assert_eq!(kano.last_updated, "2026-07-04");
    assert_eq!(state.activity_log[0].action, "Updated maize price in Kano");
}

#[test]
fn negative_price_is_rejected() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    let res = handle(
        post_form(
            "/admin/prices",
            Some(&token),
            "commodity_id=maize&region=Kano&price=-1&unit=bag",
        ),
        &app,
    );

    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));
    assert_eq!(app.snapshot().unwrap(), before);
}

#[test]
fn bulk_update_applies_last_duplicate() {
    let app = test_app();
    let token = login(&app);

    let form = "commodity_id=palm-oil&lines=Lagos%2C+100%2C+keg%0AKano%2C+90%2C+keg%0ALagos%2C+120%2C+drum";
    let resp = handle(post_form("/admin/bulk", Some(&token), form), &app).unwrap();
    assert_eq!(resp.status(), 302);

    let state = app.snapshot().unwrap();
    let palm = state.commodity("palm-oil").unwrap();
    assert_eq!(palm.price_in("Lagos").unwrap().price, 120.0);
    assert_eq!(palm.price_in("Lagos").unwrap().unit, "drum");
    assert_eq!(palm.price_in("Kano").unwrap().price, 90.0);
    assert_eq!(state.activity_log[0].action, "Bulk updated palm-oil prices");
}

#[test]
fn bulk_update_with_bad_line_applies_nothing() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    let form = "commodity_id=palm-oil&lines=Lagos%2C+100%2C+keg%0AKano%2C+lots%2C+keg";
    let res = handle(post_form("/admin/bulk", Some(&token), form), &app);

    let Err(crate::errors::ServerError::BadRequest(msg)) = res else {
        panic!("expected BadRequest");
    };
    assert!(msg.contains("line 2"));
    assert_eq!(app.snapshot().unwrap(), before);
}

#[test]
fn commodity_details_merge_non_blank_fields() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    handle(
        post_form(
            "/admin/commodities/soybean",
            Some(&token),
            "name=&icon=&base_unit=&description=Non-GMO+soybean",
        ),
        &app,
    )
    .unwrap();

    let state = app.snapshot().unwrap();
    let soy = state.commodity("soybean").unwrap();
    let old = before.commodity("soybean").unwrap();
    assert_eq!(soy.description, "Non-GMO soybean");
    assert_eq!(soy.name, old.name);
    assert_eq!(soy.prices, old.prices);
    assert_eq!(soy.history, old.history);
}

#[test]
fn commodity_details_for_unknown_id_is_not_found() {
    let app = test_app();
    let token = login(&app);

    let res = handle(
        post_form("/admin/commodities/sorghum", Some(&token), "name=Sorghum"),
        &app,
    );
    assert!(matches!(res, Err(crate::errors::ServerError::NotFound)));
}

#[test]
fn hero_is_replaced_and_rendered() {
    let app = test_app();
    let token = login(&app);

    handle(
        post_form(
            "/admin/hero",
            Some(&token),
            "headline=Harvest+prices&subheading=Fresh+from+the+field&cta_text=Go",
        ),
        &app,
    )
    .unwrap();

    let body = body_string(handle(get("/", None), &app).unwrap());
    assert!(body.contains("Harvest prices"));
    assert!(body.contains("Fresh from the field"));
    assert_eq!(
        app.snapshot().unwrap().activity_log[0].action,
        "Updated hero section content"
    );
}

#[test]
fn region_add_and_remove_round_trip() {
    let app = test_app();
    let token = login(&app);
    let before = app.snapshot().unwrap();

    handle(post_form("/admin/regions", Some(&token), "region=Plateau"), &app).unwrap();
    let added = app.snapshot().unwrap();
    assert!(added.has_region("Plateau"));
    assert!(added
        .commodities
        .iter()
        .all(|c| c.prices.len() == added.regions.len()));

    // adding again is a silent no-op
    handle(post_form("/admin/regions", Some(&token), "region=Plateau"), &app).unwrap();
    assert_eq!(app.snapshot().unwrap(), added);

    handle(
        post_form("/admin/regions/remove", Some(&token), "region=Plateau"),
        &app,
    )
    .unwrap();
    let removed = app.snapshot().unwrap();
    assert_eq!(removed.regions, before.regions);
    assert_eq!(removed.commodities, before.commodities);
    assert_eq!(removed.activity_log[0].action, "Removed region: Plateau");
}

#[test]
fn missing_form_field_is_bad_request() {
    let app = test_app();
    let token = login(&app);

    let res = handle(post_form("/admin/regions", Some(&token), "region=++"), &app);
    assert!(matches!(res, Err(crate::errors::ServerError::BadRequest(_))));
}
