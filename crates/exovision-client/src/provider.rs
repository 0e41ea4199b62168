//! Data source abstraction.
//!
//! Pages consume a `CatalogProvider` and never know whether records came
//! from the live backend or the built-in mock catalog. Provider methods
//! return `QueryState` directly — a transport failure becomes
//! `QueryState::Failed`, never an `Err` the page has to interpret.

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tracing::warn;

use exovision_common::model::{
    ConfusionMatrix, DatasetStatus, DatasetSummary, ModelStats, PerformanceSnapshot,
};
use exovision_common::record::{Classification, RawRecord};

use crate::api::ApiClient;
use crate::query::QueryState;

#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// The raw record collection the pipeline normalizes for every table.
    async fn catalog(&self) -> QueryState<Vec<RawRecord>>;

    async fn model_stats(&self) -> QueryState<ModelStats>;

    async fn performance_history(&self) -> QueryState<Vec<PerformanceSnapshot>>;

    async fn confusion_matrix(&self) -> QueryState<ConfusionMatrix>;

    /// Uploaded dataset summaries for the data management page.
    async fn datasets(&self) -> QueryState<Vec<DatasetSummary>>;
}

// ── Live provider ─────────────────────────────────────────────────────────────

/// Backed by the classification backend's REST API.
pub struct LiveProvider {
    client: ApiClient,
}

impl LiveProvider {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CatalogProvider for LiveProvider {
    async fn catalog(&self) -> QueryState<Vec<RawRecord>> {
        let result = self.client.sample_data().await;
        if let Err(err) = &result {
            warn!(%err, "catalog fetch failed");
        }
        QueryState::from_result(result)
    }

    async fn model_stats(&self) -> QueryState<ModelStats> {
        QueryState::from_result(self.client.model_stats().await)
    }

    async fn performance_history(&self) -> QueryState<Vec<PerformanceSnapshot>> {
        QueryState::from_result(self.client.performance_history().await)
    }

    async fn confusion_matrix(&self) -> QueryState<ConfusionMatrix> {
        QueryState::from_result(self.client.confusion_matrix().await)
    }

    async fn datasets(&self) -> QueryState<Vec<DatasetSummary>> {
        // The backend keeps uploaded datasets behind the same records
        // endpoint; summaries are derived per-record on the page. Until the
        // backend grows a dedicated listing, report none.
        QueryState::Ready(Vec::new())
    }
}

// ── Mock provider ─────────────────────────────────────────────────────────────

/// Serves a small fixed catalog. Used for demos and page tests; selected
/// with `data_source = "mock"` in the config.
#[derive(Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }

    fn mock_record(
        id: &str,
        name: &str,
        orbital_period: f64,
        transit_duration: f64,
        planetary_radius: f64,
        stellar_radius: f64,
        effective_temperature: f64,
        discovery_year: i32,
        classification: Classification,
        confidence: f64,
    ) -> RawRecord {
        RawRecord {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            orbital_period: Some(orbital_period),
            transit_duration: Some(transit_duration),
            planetary_radius: Some(planetary_radius),
            stellar_radius: Some(stellar_radius),
            effective_temperature: Some(effective_temperature),
            discovery_year: Some(discovery_year),
            classification: Some(classification.as_str().to_string()),
            confidence: Some(confidence),
        }
    }

    pub fn mock_catalog() -> Vec<RawRecord> {
        vec![
            Self::mock_record("1", "Kepler-452b", 384.8, 2.5, 1.6, 1.05, 5757.0, 2015, Classification::Confirmed, 0.95),
            Self::mock_record("2", "TOI-715b", 19.3, 1.2, 1.55, 0.6, 3450.0, 2024, Classification::Candidate, 0.78),
            Self::mock_record("3", "K2-18b", 33.0, 2.1, 2.37, 0.41, 3457.0, 2015, Classification::Confirmed, 0.92),
            Self::mock_record("4", "TESS-1234b", 12.4, 0.8, 0.8, 0.9, 5200.0, 2021, Classification::FalsePositive, 0.65),
            Self::mock_record("5", "Kepler-1649c", 19.5, 1.1, 1.06, 0.23, 3240.0, 2020, Classification::Confirmed, 0.88),
        ]
    }

    fn mock_stats() -> ModelStats {
        ModelStats {
            accuracy: 0.91,
            precision: 0.89,
            recall: 0.93,
            f1_score: 0.91,
            total_predictions: 15_472,
            model_version: "v2.1.0".to_string(),
            last_trained: Utc.with_ymd_and_hms(2025, 10, 4, 10, 30, 0).single(),
            training_data_size: 50_000,
        }
    }
}

#[async_trait]
impl CatalogProvider for MockProvider {
    async fn catalog(&self) -> QueryState<Vec<RawRecord>> {
        QueryState::Ready(Self::mock_catalog())
    }

    async fn model_stats(&self) -> QueryState<ModelStats> {
        QueryState::Ready(Self::mock_stats())
    }

    async fn performance_history(&self) -> QueryState<Vec<PerformanceSnapshot>> {
        let stats = Self::mock_stats();
        let base = stats.last_trained.unwrap_or_else(Utc::now);
        let history = (0..6)
            .map(|weeks_ago| PerformanceSnapshot {
                timestamp: base - Duration::weeks(weeks_ago),
                accuracy: stats.accuracy - 0.004 * weeks_ago as f64,
                precision: stats.precision - 0.003 * weeks_ago as f64,
                recall: stats.recall - 0.005 * weeks_ago as f64,
                f1_score: stats.f1_score - 0.004 * weeks_ago as f64,
                model_version: stats.model_version.clone(),
            })
            .collect();
        QueryState::Ready(history)
    }

    async fn confusion_matrix(&self) -> QueryState<ConfusionMatrix> {
        QueryState::Ready(ConfusionMatrix {
            true_positives: 4_210,
            false_positives: 310,
            true_negatives: 9_850,
            false_negatives: 402,
            labels: vec![
                Classification::Confirmed,
                Classification::Candidate,
                Classification::FalsePositive,
            ],
        })
    }

    async fn datasets(&self) -> QueryState<Vec<DatasetSummary>> {
        QueryState::Ready(vec![
            DatasetSummary {
                id: "kepler-koi".to_string(),
                name: "kepler_koi_cumulative.csv".to_string(),
                size_mb: 3.2,
                upload_date: Utc.with_ymd_and_hms(2025, 9, 18, 14, 5, 0).single(),
                format: "csv".to_string(),
                status: DatasetStatus::Ready,
                records: 9_564,
            },
            DatasetSummary {
                id: "tess-toi".to_string(),
                name: "tess_toi_catalog.csv".to_string(),
                size_mb: 1.4,
                upload_date: Utc.with_ymd_and_hms(2025, 10, 2, 9, 41, 0).single(),
                format: "csv".to_string(),
                status: DatasetStatus::Ready,
                records: 7_103,
            },
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_catalog_is_ready_with_five_records() {
        let provider = MockProvider::new();
        let state = provider.catalog().await;
        assert!(state.is_ready());
        assert_eq!(state.records().len(), 5);
    }

    #[tokio::test]
    async fn test_mock_stats_are_populated() {
        let provider = MockProvider::new();
        let state = provider.model_stats().await;
        let stats = state.ready().unwrap();
        assert!(stats.f1_score > 0.0);
        assert_eq!(stats.model_version, "v2.1.0");
    }

    #[tokio::test]
    async fn test_mock_history_is_sorted_newest_first() {
        let provider = MockProvider::new();
        let state = provider.performance_history().await;
        let history = state.ready().unwrap();
        assert_eq!(history.len(), 6);
        assert!(history.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));
    }
}
