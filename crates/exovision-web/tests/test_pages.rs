//! Router-level page tests against the mock data source.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use tower::util::ServiceExt;

use exovision_client::{ApiClient, MockProvider, QueryState};
use exovision_common::record::Exoplanet;
use exovision_web::config::Config;
use exovision_web::router::build_router;
use exovision_web::state::{AppState, SharedState};

async fn test_state() -> SharedState {
    let state = Arc::new(AppState::new(
        Config::default(),
        // Mutation endpoints are not exercised here; the port is a dead end.
        ApiClient::new("http://127.0.0.1:1/api"),
        Arc::new(MockProvider::new()),
    ));
    // Seed the cache directly instead of spawning the refresh task.
    state
        .set_catalog(QueryState::Ready(MockProvider::mock_catalog()))
        .await;
    state
}

async fn get_body(state: SharedState, uri: &str) -> (StatusCode, String) {
    let app = build_router(state);
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&bytes).to_string())
}

#[tokio::test]
async fn test_dashboard_renders_stats_and_recent_predictions() {
    let (status, body) = get_body(test_state().await, "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Dashboard"));
    assert!(body.contains("15,472"));
    assert!(body.contains("v2.1.0"));
    assert!(body.contains("Kepler-452b"));
}

#[tokio::test]
async fn test_data_page_lists_the_full_catalog() {
    let (status, body) = get_body(test_state().await, "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 1 to 5 of 5 records"));
    for name in ["Kepler-452b", "TOI-715b", "K2-18b", "TESS-1234b", "Kepler-1649c"] {
        assert!(body.contains(name), "missing {name}");
    }
}

#[tokio::test]
async fn test_data_page_sorts_descending_by_orbital_period() {
    let (status, body) =
        get_body(test_state().await, "/data?sort=orbital_period&dir=desc").await;
    assert_eq!(status, StatusCode::OK);
    let first = body.find("Kepler-452b").unwrap();
    let last = body.find("TESS-1234b").unwrap();
    assert!(first < last, "384.8d planet should precede 12.4d planet");
}

#[tokio::test]
async fn test_data_page_clamps_out_of_range_page() {
    let (status, body) = get_body(test_state().await, "/data?page=99").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 1 to 5 of 5 records"));
    assert!(body.contains("Page 1 of 1"));
}

#[tokio::test]
async fn test_data_page_unknown_sort_key_is_harmless() {
    let (status, body) = get_body(test_state().await, "/data?sort=bogus&dir=asc").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Kepler-452b"));
}

#[tokio::test]
async fn test_data_page_search_filters_by_name() {
    let (status, body) = get_body(test_state().await, "/data?q=kepler").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Showing 1 to 2 of 2 records"));
    assert!(body.contains("Kepler-452b"));
    assert!(body.contains("Kepler-1649c"));
    assert!(!body.contains("TOI-715b"));
}

#[tokio::test]
async fn test_pending_catalog_shows_loading_placeholder() {
    let state = Arc::new(AppState::new(
        Config::default(),
        ApiClient::new("http://127.0.0.1:1/api"),
        Arc::new(MockProvider::new()),
    ));
    // Cache untouched: still Pending.
    let (status, body) = get_body(state, "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Loading catalog"));
}

#[tokio::test]
async fn test_failed_catalog_shows_error_placeholder() {
    let state = test_state().await;
    state
        .set_catalog(QueryState::Failed("connection refused".to_string()))
        .await;
    let (status, body) = get_body(state, "/data").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Failed to load catalog"));
    // Transport detail stays out of the page.
    assert!(!body.contains("connection refused"));
}

#[tokio::test]
async fn test_analytics_renders_correlation_matrix() {
    let (status, body) = get_body(test_state().await, "/analytics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("Feature Correlation Matrix"));
    // Unit diagonal.
    assert!(body.contains("1.00"));
    assert!(body.contains("Orbital Period"));
    assert!(body.contains("Effective Temperature"));
}

#[tokio::test]
async fn test_api_catalog_returns_normalized_records() {
    let app = build_router(test_state().await);
    let response = app
        .oneshot(Request::builder().uri("/api/catalog").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let records: Vec<Exoplanet> = serde_json::from_slice(&bytes).unwrap();
    assert!(records.iter().all(|r| !r.id.is_empty() && !r.name.is_empty()));
    // The mock catalog normalizes to exactly the shared fixture catalog.
    assert_eq!(records, exovision_test_utils::sample_catalog());
}

#[tokio::test]
async fn test_sidebar_toggle_redirects_back() {
    let state = test_state().await;
    let app = build_router(Arc::clone(&state));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/ui/sidebar")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("next=/data"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/data");
    assert!(state.ui().await.sidebar_collapsed);
}

#[tokio::test]
async fn test_training_config_update_roundtrip() {
    let state = test_state().await;
    let app = build_router(Arc::clone(&state));
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/training/config")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "model_type=xgboost&learning_rate=0.05&n_estimators=250&max_depth=8\
                     &batch_size=64&epochs=20&validation_split=0.25&test_split=0.1",
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let model = state.model().await;
    assert_eq!(model.training.hyperparameters.n_estimators, 250);
    assert_eq!(model.training.hyperparameters.epochs, 20);
    assert_eq!(model.selected_model.as_str(), "xgboost");

    // The saved values render back into the form.
    let (status, body) = get_body(state, "/training").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.contains(r#"value="250""#));
    // A notification was queued by the update.
    assert!(body.contains("Training configuration updated"));
}
