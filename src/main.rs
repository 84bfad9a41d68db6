use crate::app::App;
use crate::config::AppConfig;
use crate::router::handle;
use crate::store::Store;
use astra::Server;
use tracing_subscriber::EnvFilter;

mod app;
mod auth;
mod config;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1️⃣ Configuration from the environment
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    tracing::info!(?config, "configuration loaded");

    // 2️⃣ Seeded in-memory store; everything resets on restart
    let store = Store::seeded();
    let state = store.state();
    tracing::info!(
        commodities = state.commodities.len(),
        regions = state.regions.len(),
        "store seeded"
    );

    // 3️⃣ Start the server
    let addr = config.bind_addr;
    let server = Server::bind(&addr).max_workers(config.max_workers);
    let app = App::new(config, store);
    tracing::info!("listening on http://{addr}");

    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        tracing::error!(error = %e, "server ended with error");
    }

    tracing::info!("server shut down");
}
