pub mod admin;
pub mod commodity;
pub mod dashboard;
pub mod login;

pub use admin::{admin_page, AdminVm};
pub use commodity::commodity_page;
pub use dashboard::{dashboard_page, DashboardVm};
pub use login::login_page;
