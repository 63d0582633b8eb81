mod app;
mod catalog;
mod config;
mod error;
mod leads;
mod notify;
mod routes;
mod state;
mod store;

use crate::config::AppConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "hqd_api=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = AppConfig::from_env()?;
    let grace = config.shutdown_grace();
    let app_state = AppState::init(config).await?;

    let notifications = app_state.notifications.clone();
    let store = app_state.store.clone();
    let config = app_state.config.clone();

    let served = app::serve(app::build_app(app_state), &config).await;

    if notifications.in_flight() > 0 {
        tracing::info!(pending = notifications.in_flight(), "draining lead notifications");
    }
    notifications.shutdown(grace).await;
    store.close().await;
    tracing::info!("shutdown complete");

    served
}
