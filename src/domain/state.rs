// src/domain/state.rs

use crate::domain::commodity::Commodity;
use serde::{Deserialize, Serialize};

/// Most entries the activity log keeps; older ones are dropped.
pub const ACTIVITY_LOG_CAPACITY: usize = 10;

/// Root of the in-memory state tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub commodities: Vec<Commodity>,
    /// Region names in display order.
    pub regions: Vec<String>,
    pub hero: HeroConfig,
    /// Most recent first.
    pub activity_log: Vec<ActivityLogEntry>,
    pub users: Vec<User>,
}

impl AppState {
    pub fn commodity(&self, id: &str) -> Option<&Commodity> {
        self.commodities.iter().find(|c| c.id == id)
    }

    pub fn has_region(&self, region: &str) -> bool {
        self.regions.iter().any(|r| r == region)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroConfig {
    pub headline: String,
    pub subheading: String,
    pub cta_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityLogEntry {
    pub id: String,
    pub timestamp: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Editor => "Editor",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    // Plaintext; kept out of every serialized snapshot.
    #[serde(skip_serializing)]
    pub password: String,
    pub role: Role,
    pub created_at: String,
}
