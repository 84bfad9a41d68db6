// src/store/action.rs

use crate::domain::bulk::check_price;
use crate::domain::{CommodityPatch, HeroConfig, PriceUpdate};
use serde::{Deserialize, Serialize};

/// Every state change the store accepts.
///
/// On the wire an action is a JSON object tagged by `type`
/// (`{"type": "ADD_REGION", "region": "Plateau"}`). A `type` this build does
/// not know deserializes to [`Action::Unrecognized`], which the reducer treats
/// as the identity transition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Action {
    UpdatePrice {
        commodity_id: String,
        region: String,
        price: f64,
        unit: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        change: Option<f64>,
    },
    BulkUpdate {
        commodity_id: String,
        updates: Vec<PriceUpdate>,
    },
    UpdateCommodity {
        commodity_id: String,
        fields: CommodityPatch,
    },
    UpdateHero {
        hero: HeroConfig,
    },
    AddRegion {
        region: String,
    },
    RemoveRegion {
        region: String,
    },
    AddLog {
        text: String,
    },
    #[serde(other)]
    Unrecognized,
}

impl Action {
    /// Wire name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::UpdatePrice { .. } => "UPDATE_PRICE",
            Action::BulkUpdate { .. } => "BULK_UPDATE",
            Action::UpdateCommodity { .. } => "UPDATE_COMMODITY",
            Action::UpdateHero { .. } => "UPDATE_HERO",
            Action::AddRegion { .. } => "ADD_REGION",
            Action::RemoveRegion { .. } => "REMOVE_REGION",
            Action::AddLog { .. } => "ADD_LOG",
            Action::Unrecognized => "UNRECOGNIZED",
        }
    }

    /// Every price an action carries must be finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Action::UpdatePrice { price, .. } => check_price(*price).map(drop),
            Action::BulkUpdate { updates, .. } => updates.iter().enumerate().try_for_each(|(i, u)| {
                check_price(u.price)
                    .map(drop)
                    .map_err(|e| format!("update {}: {e}", i + 1))
            }),
            Action::UpdateCommodity { fields, .. } => {
                let history = fields.history.iter().flatten().map(|p| p.price);
                let prices = fields.prices.iter().flatten().map(|p| p.price);
                history.chain(prices).try_for_each(|p| check_price(p).map(drop))
            }
            _ => Ok(()),
        }
    }
}
