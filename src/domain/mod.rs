pub mod bulk;
pub mod commodity;
pub mod logic;
pub mod state;

pub use commodity::{Commodity, CommodityPatch, PriceData, PricePoint, PriceUpdate};
pub use state::{ActivityLogEntry, AppState, HeroConfig, Role, User};
