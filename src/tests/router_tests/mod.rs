mod admin_tests;
mod api_tests;
mod auth_tests;
mod dashboard_tests;
