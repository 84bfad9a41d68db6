use std::collections::HashMap;
use std::io::Read;

use crate::app::App;
use crate::auth;
use crate::domain::bulk::{parse_bulk_updates, parse_price};
use crate::domain::{CommodityPatch, HeroConfig};
use crate::errors::ServerError;
use crate::responses::{
    html_response, html_response_with_status, json_response, redirect, stylesheet_response,
    ResultResp,
};
use crate::spreadsheets::export_prices_xlsx;
use crate::store::Action;
use crate::templates::pages::{admin_page, commodity_page, dashboard_page, login_page, AdminVm, DashboardVm};
use astra::Request;

const MAIN_CSS: &str = include_str!("../static/main.css");
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &App) -> ResultResp {
    let method = req.method().as_str().to_owned();
    let path = req.uri().path().to_owned();
    let token = auth::session_token(&req);
    let is_admin = app.is_privileged(token.as_deref())?;

    let segments: Vec<&str> = path
        .trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect();

    tracing::debug!(%method, %path, is_admin, "request");

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => {
            let params = parse_query(&req);
            let state = app.snapshot()?;
            let vm = DashboardVm::build(
                &state,
                params.get("q").map(String::as_str).unwrap_or(""),
                params.get("region").map(String::as_str),
                is_admin,
            );
            html_response(dashboard_page(&vm))
        }

        ("GET", ["commodities", id]) => {
            let state = app.snapshot()?;
            let commodity = state.commodity(id).ok_or(ServerError::NotFound)?;
            html_response(commodity_page(commodity, is_admin))
        }

        ("GET", ["export", "prices.xlsx"]) => {
            let state = app.snapshot()?;
            let today = chrono::Local::now().format("%Y-%m-%d").to_string();
            export_prices_xlsx(&state, &today)
        }

        ("GET", ["static", "main.css"]) => stylesheet_response(MAIN_CSS),

        ("GET", ["login"]) => {
            if is_admin {
                return redirect("/admin", None);
            }
            html_response(login_page(None))
        }

        ("POST", ["login"]) => {
            let form = read_form(req)?;
            let submitted = form.get("passcode").map(String::as_str).unwrap_or("");
            if !auth::passcode_matches(submitted, &app.config.admin_passcode) {
                tracing::warn!("admin sign-in rejected");
                return html_response_with_status(401, login_page(Some("That passcode is not right.")));
            }

            let session = app.start_session()?;
            app.dispatch(Action::AddLog {
                text: "Admin signed in".to_string(),
            })?;
            tracing::info!("admin signed in");
            redirect(
                "/admin",
                Some(auth::session_cookie(&session, app.config.session_ttl_secs)),
            )
        }

        ("POST", ["logout"]) => {
            if let Some(token) = token.as_deref() {
                if app.end_session(token)? {
                    app.dispatch(Action::AddLog {
                        text: "Admin signed out".to_string(),
                    })?;
                    tracing::info!("admin signed out");
                }
            }
            redirect("/", Some(auth::cleared_session_cookie()))
        }

        ("GET", ["api", "state"]) => json_response(&app.snapshot()?),

        ("POST", ["api", "dispatch"]) => {
            if !is_admin {
                return Err(ServerError::Unauthorized("admin session required".into()));
            }
            let body = read_body(req)?;
            let action: Action = serde_json::from_str(&body)
                .map_err(|e| ServerError::BadRequest(format!("invalid action: {e}")))?;
            action.validate().map_err(|e| {
                tracing::warn!(action = action.kind(), error = %e, "api dispatch rejected");
                ServerError::BadRequest(format!("invalid action: {e}"))
            })?;
            tracing::info!(action = action.kind(), "api dispatch");
            json_response(&app.dispatch(action)?)
        }

        (_, ["admin", ..]) if !is_admin => redirect("/login", None),

        ("GET", ["admin"]) => {
            let state = app.snapshot()?;
            html_response(admin_page(&AdminVm { state: &state }))
        }

        ("POST", ["admin", "prices"]) => {
            let form = read_form(req)?;
            let price = parse_price(required(&form, "price")?).map_err(ServerError::BadRequest)?;
            let change = optional_number(&form, "change")?;
            admin_dispatch(
                app,
                Action::UpdatePrice {
                    commodity_id: required(&form, "commodity_id")?.to_string(),
                    region: required(&form, "region")?.to_string(),
                    price,
                    unit: required(&form, "unit")?.to_string(),
                    change,
                },
            )
        }

        ("POST", ["admin", "bulk"]) => {
            let form = read_form(req)?;
            let commodity_id = required(&form, "commodity_id")?.to_string();
            let updates = parse_bulk_updates(form.get("lines").map(String::as_str).unwrap_or(""))?;
            admin_dispatch(
                app,
                Action::BulkUpdate {
                    commodity_id,
                    updates,
                },
            )
        }

        ("POST", ["admin", "commodities", id]) => {
            let commodity_id = id.to_string();
            if app.snapshot()?.commodity(&commodity_id).is_none() {
                return Err(ServerError::NotFound);
            }
            let form = read_form(req)?;
            let fields = CommodityPatch {
                name: non_blank(&form, "name"),
                icon: non_blank(&form, "icon"),
                description: non_blank(&form, "description"),
                base_unit: non_blank(&form, "base_unit"),
                ..Default::default()
            };
            if fields.is_empty() {
                return redirect("/admin", None);
            }
            admin_dispatch(
                app,
                Action::UpdateCommodity {
                    commodity_id,
                    fields,
                },
            )
        }

        ("POST", ["admin", "hero"]) => {
            let form = read_form(req)?;
            let field = |name: &str| form.get(name).map(|v| v.trim().to_string()).unwrap_or_default();
            let hero = HeroConfig {
                headline: field("headline"),
                subheading: field("subheading"),
                cta_text: field("cta_text"),
            };
            admin_dispatch(app, Action::UpdateHero { hero })
        }

        ("POST", ["admin", "regions"]) => {
            let form = read_form(req)?;
            let region = required(&form, "region")?.to_string();
            admin_dispatch(app, Action::AddRegion { region })
        }

        ("POST", ["admin", "regions", "remove"]) => {
            let form = read_form(req)?;
            let region = required(&form, "region")?.to_string();
            admin_dispatch(app, Action::RemoveRegion { region })
        }

        _ => Err(ServerError::NotFound),
    }
}

fn admin_dispatch(app: &App, action: Action) -> ResultResp {
    tracing::info!(action = action.kind(), "admin edit");
    app.dispatch(action)?;
    redirect("/admin", None)
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

fn read_body(mut req: Request) -> Result<String, ServerError> {
    let mut body = String::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_string(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable body: {e}")))?;
    Ok(body)
}

/// Decode an `application/x-www-form-urlencoded` body. Repeated keys keep
/// the last value.
fn read_form(req: Request) -> Result<HashMap<String, String>, ServerError> {
    let body = read_body(req)?;
    Ok(url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect())
}

fn required<'a>(form: &'a HashMap<String, String>, name: &str) -> Result<&'a str, ServerError> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ServerError::BadRequest(format!("missing field `{name}`")))
}

fn non_blank(form: &HashMap<String, String>, name: &str) -> Option<String> {
    form.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn optional_number(form: &HashMap<String, String>, name: &str) -> Result<Option<f64>, ServerError> {
    match non_blank(form, name) {
        None => Ok(None),
        Some(raw) => raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Some)
            .ok_or_else(|| ServerError::BadRequest(format!("`{name}` must be a number"))),
    }
}
