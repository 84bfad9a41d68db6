// src/store/seed.rs
//
// Reference data the store starts from on every boot. Values are
// illustrative; only the shape matters to the rest of the app.

use crate::domain::commodity::NEVER_UPDATED;
use crate::domain::{AppState, Commodity, HeroConfig, PriceData, PricePoint, Role, User};

pub const SEED_REGIONS: &[&str] = &["Lagos", "Kano", "Oyo", "Rivers", "Kaduna", "Benue"];

const SEED_DATE: &str = "2026-09-30";
const HISTORY_MONTHS: [&str; 6] = [
    "2026-04", "2026-05", "2026-06", "2026-07", "2026-08", "2026-09",
];

struct CommoditySeed {
    id: &'static str,
    name: &'static str,
    icon: &'static str,
    description: &'static str,
    unit: &'static str,
    history: [f64; 6],
    /// (price, change %) per entry of `SEED_REGIONS`, same order.
    regional: [(f64, f64); 6],
}

const COMMODITIES: &[CommoditySeed] = &[
    CommoditySeed {
        id: "palm-oil",
        name: "Palm Oil",
        icon: "droplets",
        description: "Red palm oil, sold by the 25 litre keg.",
        unit: "25L keg",
        history: [38_000.0, 39_500.0, 41_000.0, 40_200.0, 42_500.0, 44_000.0],
        regional: [
            (45_000.0, 2.3),
            (42_000.0, 1.1),
            (43_500.0, 3.0),
            (41_000.0, -0.8),
            (44_000.0, 1.6),
            (0.0, 0.0),
        ],
    },
    CommoditySeed {
        id: "cocoa",
        name: "Cocoa",
        icon: "bean",
        description: "Dried, fermented cocoa beans, grade 1.",
        unit: "ton",
        history: [
            4_800_000.0,
            4_650_000.0,
            4_500_000.0,
            4_420_000.0,
            4_300_000.0,
            4_150_000.0,
        ],
        regional: [
            (4_200_000.0, -1.5),
            (0.0, 0.0),
            (4_100_000.0, -2.2),
            (4_250_000.0, -0.9),
            (0.0, 0.0),
            (4_050_000.0, -3.1),
        ],
    },
    CommoditySeed {
        id: "ginger",
        name: "Ginger",
        icon: "leaf",
        description: "Dried split ginger from the northern belt.",
        unit: "50kg bag",
        history: [52_000.0, 54_000.0, 57_500.0, 60_000.0, 58_500.0, 61_000.0],
        regional: [
            (63_000.0, 1.9),
            (59_000.0, 2.4),
            (62_000.0, 0.7),
            (64_500.0, 1.2),
            (57_500.0, 3.5),
            (60_000.0, 0.4),
        ],
    },
    CommoditySeed {
        id: "paddy-rice",
        name: "Paddy Rice",
        icon: "wheat",
        description: "Unmilled local paddy rice.",
        unit: "100kg bag",
        history: [68_000.0, 70_000.0, 72_500.0, 71_000.0, 73_000.0, 75_500.0],
        regional: [
            (78_000.0, 2.0),
            (72_000.0, 1.4),
            (74_500.0, 0.9),
            (79_000.0, 2.8),
            (73_000.0, 1.1),
            (70_500.0, 0.6),
        ],
    },
    CommoditySeed {
        id: "maize",
        name: "Maize",
        icon: "corn",
        description: "Yellow and white maize, shelled and dried.",
        unit: "100kg bag",
        history: [45_000.0, 43_500.0, 41_000.0, 40_000.0, 39_000.0, 40_500.0],
        regional: [
            (44_000.0, -0.5),
            (38_500.0, -1.2),
            (40_000.0, 0.3),
            (45_500.0, -0.2),
            (37_500.0, -1.8),
            (39_000.0, 0.0),
        ],
    },
    CommoditySeed {
        id: "soybean",
        name: "Soybean",
        icon: "sprout",
        description: "Cleaned soybean for feed and oil milling.",
        unit: "100kg bag",
        history: [55_000.0, 56_000.0, 58_000.0, 59_500.0, 61_000.0, 62_000.0],
        regional: [
            (64_000.0, 1.5),
            (60_000.0, 2.1),
            (61_500.0, 1.0),
            (0.0, 0.0),
            (59_000.0, 2.6),
            (60_500.0, 1.7),
        ],
    },
];

/// The state every store starts from.
pub fn default_state() -> AppState {
    AppState {
        commodities: COMMODITIES.iter().map(build_commodity).collect(),
        regions: SEED_REGIONS.iter().map(|r| r.to_string()).collect(),
        hero: default_hero(),
        activity_log: Vec::new(),
        users: default_users(),
    }
}

pub fn default_hero() -> HeroConfig {
    HeroConfig {
        headline: "Live agricultural commodity prices".to_string(),
        subheading: "Compare market prices for staple crops across regions, updated by our field desk."
            .to_string(),
        cta_text: "Browse prices".to_string(),
    }
}

fn build_commodity(seed: &CommoditySeed) -> Commodity {
    let history = HISTORY_MONTHS
        .iter()
        .zip(seed.history)
        .map(|(month, price)| PricePoint {
            date: month.to_string(),
            price,
        })
        .collect();

    let prices = SEED_REGIONS
        .iter()
        .zip(seed.regional)
        .map(|(region, (price, change))| PriceData {
            region: region.to_string(),
            price,
            unit: seed.unit.to_string(),
            last_updated: if price > 0.0 {
                SEED_DATE.to_string()
            } else {
                NEVER_UPDATED.to_string()
            },
            change,
        })
        .collect();

    Commodity {
        id: seed.id.to_string(),
        name: seed.name.to_string(),
        icon: seed.icon.to_string(),
        description: seed.description.to_string(),
        base_unit: seed.unit.to_string(),
        history,
        prices,
    }
}

fn default_users() -> Vec<User> {
    vec![
        User {
            id: "u-1".to_string(),
            username: "admin".to_string(),
            password: "admin123".to_string(),
            role: Role::Admin,
            created_at: "2026-01-05".to_string(),
        },
        User {
            id: "u-2".to_string(),
            username: "desk-editor".to_string(),
            password: "editor123".to_string(),
            role: Role::Editor,
            created_at: "2026-02-18".to_string(),
        },
    ]
}
