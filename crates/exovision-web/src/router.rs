//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    analytics::analytics_page,
    api,
    classify::{classify_page, classify_submit},
    dashboard::dashboard,
    data::{data_page, refresh, upload},
    training::{reset_config, run_training, training_page, update_config},
    ui,
};
use crate::state::SharedState;

/// Build and return the full Axum router.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        // Pages
        .route("/",          get(dashboard))
        .route("/data",      get(data_page))
        .route("/classify",  get(classify_page).post(classify_submit))
        .route("/analytics", get(analytics_page))
        .route("/training",  get(training_page))

        // Mutations
        .route("/data/upload",     post(upload))
        .route("/data/refresh",    post(refresh))
        .route("/training/config", post(update_config))
        .route("/training/reset",  post(reset_config))
        .route("/training/run",    post(run_training))

        // UI state transitions
        .route("/ui/sidebar",               post(ui::toggle_sidebar))
        .route("/ui/theme",                 post(ui::toggle_theme))
        .route("/ui/notifications/dismiss", post(ui::dismiss_notification))

        // JSON API
        .route("/api/catalog",     get(api::catalog))
        .route("/api/stats",       get(api::stats))
        .route("/api/correlation", get(api::correlation))

        // Static files
        .nest_service("/static", ServeDir::new("static"))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
