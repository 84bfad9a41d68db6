// src/store/reducer.rs

use std::collections::HashMap;

use crate::domain::state::ACTIVITY_LOG_CAPACITY;
use crate::domain::{ActivityLogEntry, AppState, Commodity, PriceData, PriceUpdate};
use crate::store::action::Action;
use crate::store::clock::Stamp;

/// Computes the next state from the current one and an action.
///
/// Pure: the only time-derived input is `stamp`, supplied by the caller.
/// Every recognised action appends one activity-log entry, except
/// `ADD_REGION` for a region that already exists, which returns the state
/// untouched. Unrecognised actions are the identity.
pub fn transition(state: AppState, action: &Action, stamp: &Stamp) -> AppState {
    match action {
        Action::UpdatePrice {
            commodity_id,
            region,
            price,
            unit,
            change,
        } => {
            let mut next = map_commodity(state, commodity_id, |mut c| {
                for entry in c.prices.iter_mut().filter(|p| &p.region == region) {
                    set_price(entry, *price, unit, *change, &stamp.date);
                }
                c
            });
            push_log(
                &mut next,
                stamp,
                format!("Updated {commodity_id} price in {region}"),
            );
            next
        }

        Action::BulkUpdate {
            commodity_id,
            updates,
        } => {
            // Later lines for the same region overwrite earlier ones.
            let by_region: HashMap<&str, &PriceUpdate> =
                updates.iter().map(|u| (u.region.as_str(), u)).collect();

            let mut next = map_commodity(state, commodity_id, |mut c| {
                for entry in c.prices.iter_mut() {
                    if let Some(u) = by_region.get(entry.region.as_str()) {
                        set_price(entry, u.price, &u.unit, u.change, &stamp.date);
                    }
                }
                c
            });
            push_log(&mut next, stamp, format!("Bulk updated {commodity_id} prices"));
            next
        }

        Action::UpdateCommodity {
            commodity_id,
            fields,
        } => {
            let mut next = map_commodity(state, commodity_id, |c| fields.clone().apply(c));
            push_log(
                &mut next,
                stamp,
                format!("Updated commodity details for {commodity_id}"),
            );
            next
        }

        Action::UpdateHero { hero } => {
            let mut next = state;
            next.hero = hero.clone();
            push_log(&mut next, stamp, "Updated hero section content".to_string());
            next
        }

        Action::AddRegion { region } => {
            if state.has_region(region) {
                return state;
            }
            let mut next = state;
            next.regions.push(region.clone());
            for c in next.commodities.iter_mut() {
                let entry = PriceData::empty(region, &c.base_unit);
                c.prices.push(entry);
            }
            push_log(&mut next, stamp, format!("Added new region: {region}"));
            next
        }

        Action::RemoveRegion { region } => {
            let mut next = state;
            next.regions.retain(|r| r != region);
            for c in next.commodities.iter_mut() {
                c.prices.retain(|p| &p.region != region);
            }
            push_log(&mut next, stamp, format!("Removed region: {region}"));
            next
        }

        Action::AddLog { text } => {
            let mut next = state;
            push_log(&mut next, stamp, text.clone());
            next
        }

        Action::Unrecognized => state,
    }
}

/// Replace the commodity with `id` by `f(commodity)`; others are untouched.
/// An unknown id replaces nothing.
fn map_commodity<F>(mut state: AppState, id: &str, f: F) -> AppState
where
    F: FnOnce(Commodity) -> Commodity,
{
    if let Some(slot) = state.commodities.iter_mut().find(|c| c.id == id) {
        *slot = f(std::mem::take(slot));
    }
    state
}

fn set_price(entry: &mut PriceData, price: f64, unit: &str, change: Option<f64>, date: &str) {
    entry.price = price;
    entry.unit = unit.to_string();
    entry.last_updated = date.to_string();
    if let Some(change) = change {
        entry.change = change;
    }
}

fn push_log(state: &mut AppState, stamp: &Stamp, action: String) {
    state.activity_log.insert(
        0,
        ActivityLogEntry {
            id: stamp.id.clone(),
            timestamp: stamp.timestamp.clone(),
            action,
        },
    );
    state.activity_log.truncate(ACTIVITY_LOG_CAPACITY);
}
