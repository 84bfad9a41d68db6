// src/domain/logic.rs

use crate::domain::commodity::{Commodity, PricePoint, NEVER_UPDATED};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    pub fn label(self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
        }
    }
}

/// Mean of the regional prices that actually carry data (price > 0).
///
/// Regions still at 0 are "no data yet" and do not drag the mean down.
/// Returns 0 when no region has a price.
pub fn average_price(commodity: &Commodity) -> f64 {
    let (sum, count) = commodity
        .prices
        .iter()
        .filter(|p| p.has_data())
        .fold((0.0, 0usize), |(sum, count), p| (sum + p.price, count + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Compares the last history sample with the first.
///
/// A flat series counts as up, and so does a history with fewer than two
/// points, since there is nothing to compare.
pub fn trend(history: &[PricePoint]) -> Trend {
    match (history.first(), history.last()) {
        (Some(first), Some(last)) if last.price < first.price => Trend::Down,
        _ => Trend::Up,
    }
}

/// `(last / first - 1) * 100` over the history endpoints.
///
/// 0 when there are fewer than two points or the first price is 0.
pub fn percent_change(history: &[PricePoint]) -> f64 {
    if history.len() < 2 {
        return 0.0;
    }
    let first = history[0].price;
    let last = history[history.len() - 1].price;
    if first == 0.0 {
        return 0.0;
    }
    (last / first - 1.0) * 100.0
}

/// Latest `last_updated` date across the commodity's regions, if any region
/// has ever been updated. Dates are ISO strings so lexical order is enough.
pub fn latest_update(commodity: &Commodity) -> Option<&str> {
    commodity
        .prices
        .iter()
        .map(|p| p.last_updated.as_str())
        .filter(|d| *d != NEVER_UPDATED)
        .max()
}

/// Case-insensitive search over id, name and description.
/// An empty or blank query keeps everything.
pub fn filter_commodities<'a>(commodities: &'a [Commodity], query: &str) -> Vec<&'a Commodity> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return commodities.iter().collect();
    }

    commodities
        .iter()
        .filter(|c| {
            c.id.to_lowercase().contains(&needle)
                || c.name.to_lowercase().contains(&needle)
                || c.description.to_lowercase().contains(&needle)
        })
        .collect()
}
