//! ExoVision Web Server
//!
//! Run with: cargo run -p exovision-web

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use exovision_client::{ApiClient, CatalogProvider, LiveProvider, MockProvider};
use exovision_web::config::{Config, DataSource};
use exovision_web::router::build_router;
use exovision_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::load()?;
    let api = ApiClient::new(config.backend.base_url.clone());

    let provider: Arc<dyn CatalogProvider> = match config.backend.data_source {
        DataSource::Live => Arc::new(LiveProvider::new(ApiClient::new(
            config.backend.base_url.clone(),
        ))),
        DataSource::Mock => Arc::new(MockProvider::new()),
    };
    info!(source = ?config.backend.data_source, backend = %config.backend.base_url, "data source configured");

    let bind = config.server.bind.clone();
    let state = Arc::new(AppState::new(config, api, provider));
    Arc::clone(&state).spawn_catalog_refresh();

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind).await?;
    info!("ExoVision dashboard listening on http://{bind}");
    axum::serve(listener, app).await?;

    Ok(())
}
