// src/domain/commodity.rs

use serde::{Deserialize, Serialize};

/// `last_updated` value for a region that has never received a price.
pub const NEVER_UPDATED: &str = "-";

/// A tracked tradable good with per-region prices and a price history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commodity {
    pub id: String,
    pub name: String,
    /// Symbolic icon name, resolved to a glyph when rendered.
    pub icon: String,
    pub description: String,
    pub base_unit: String,
    /// Chronological samples used for trend display.
    pub history: Vec<PricePoint>,
    /// One entry per known region, in region display order.
    pub prices: Vec<PriceData>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: String,
    pub price: f64,
}

/// Price of a commodity in one region.
///
/// A `price` of 0 means no data yet. `change` is a signed percentage supplied
/// by whoever sets the price; it is never derived from the history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceData {
    pub region: String,
    pub price: f64,
    pub unit: String,
    pub last_updated: String,
    pub change: f64,
}

impl PriceData {
    /// Placeholder entry for a region that was just added.
    pub fn empty(region: &str, unit: &str) -> Self {
        Self {
            region: region.to_string(),
            price: 0.0,
            unit: unit.to_string(),
            last_updated: NEVER_UPDATED.to_string(),
            change: 0.0,
        }
    }

    pub fn has_data(&self) -> bool {
        self.price > 0.0
    }
}

impl Commodity {
    pub fn price_in(&self, region: &str) -> Option<&PriceData> {
        self.prices.iter().find(|p| p.region == region)
    }
}

/// Field-by-field patch for `UPDATE_COMMODITY`. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommodityPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<PricePoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<PriceData>>,
}

impl CommodityPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merge the set fields onto `commodity`, consuming both.
    pub fn apply(self, mut commodity: Commodity) -> Commodity {
        if let Some(name) = self.name {
            commodity.name = name;
        }
        if let Some(icon) = self.icon {
            commodity.icon = icon;
        }
        if let Some(description) = self.description {
            commodity.description = description;
        }
        if let Some(base_unit) = self.base_unit {
            commodity.base_unit = base_unit;
        }
        if let Some(history) = self.history {
            commodity.history = history;
        }
        if let Some(prices) = self.prices {
            commodity.prices = prices;
        }
        commodity
    }
}

/// One line of a bulk price update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    pub region: String,
    pub price: f64,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
}
