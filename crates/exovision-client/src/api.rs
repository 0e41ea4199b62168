//! HTTP client for the classification backend.
//!
//! Endpoint paths follow the backend's `/api` surface: `stats`, `data/sample`,
//! `data`, `data/{id}/preview`, `predict`, `predict/batch`, `upload`,
//! `train`, `train/progress`, `analytics/performance`,
//! `analytics/confusion-matrix`.

use chrono::Utc;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, instrument};
use uuid::Uuid;

use exovision_common::model::{
    BatchOutcome, ConfusionMatrix, ModelStats, PerformanceSnapshot, Prediction, PredictionInput,
    TrainingConfig, UploadReceipt,
};
use exovision_common::record::{Classification, RawRecord};

use crate::error::{ClientError, Result};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

// ── Response envelopes ────────────────────────────────────────────────────────

/// `/api/stats` wraps the payload in `{"model_stats": {...}}`.
#[derive(Deserialize)]
struct StatsEnvelope {
    model_stats: ModelStats,
}

/// Record endpoints return either `{"columns": [...], "data": [...]}` or a
/// bare array depending on backend version; accept both.
#[derive(Deserialize)]
#[serde(untagged)]
enum RecordsEnvelope {
    Wrapped { data: Vec<RawRecord> },
    Bare(Vec<RawRecord>),
}

impl RecordsEnvelope {
    fn into_records(self) -> Vec<RawRecord> {
        match self {
            RecordsEnvelope::Wrapped { data } => data,
            RecordsEnvelope::Bare(records)    => records,
        }
    }
}

/// `/api/predict` returns `{"prediction": "<label>", "input": {...}}`.
#[derive(Deserialize)]
struct PredictEnvelope {
    prediction: String,
    #[serde(default)]
    confidence: Option<f64>,
    #[serde(default)]
    model_version: Option<String>,
}

#[derive(Deserialize)]
struct ProgressEnvelope {
    #[serde(alias = "percent")]
    progress: f64,
}

// ── Client ────────────────────────────────────────────────────────────────────

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(ClientError::Backend {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.http.get(self.url(path)).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    // ── Reads ────────────────────────────────────────────────────────────────

    #[instrument(skip(self))]
    pub async fn model_stats(&self) -> Result<ModelStats> {
        let envelope: StatsEnvelope = self.get_json("stats").await?;
        Ok(envelope.model_stats)
    }

    #[instrument(skip(self))]
    pub async fn sample_data(&self) -> Result<Vec<RawRecord>> {
        let envelope: RecordsEnvelope = self.get_json("data/sample").await?;
        let records = envelope.into_records();
        debug!(count = records.len(), "fetched sample records");
        Ok(records)
    }

    #[instrument(skip(self))]
    pub async fn dataset_preview(&self, id: &str) -> Result<Vec<RawRecord>> {
        let envelope: RecordsEnvelope = self.get_json(&format!("data/{id}/preview")).await?;
        Ok(envelope.into_records())
    }

    #[instrument(skip(self))]
    pub async fn performance_history(&self) -> Result<Vec<PerformanceSnapshot>> {
        self.get_json("analytics/performance").await
    }

    #[instrument(skip(self))]
    pub async fn confusion_matrix(&self) -> Result<ConfusionMatrix> {
        self.get_json("analytics/confusion-matrix").await
    }

    #[instrument(skip(self))]
    pub async fn training_progress(&self) -> Result<f64> {
        let envelope: ProgressEnvelope = self.get_json("train/progress").await?;
        Ok(envelope.progress)
    }

    // ── Mutations ────────────────────────────────────────────────────────────

    /// Classify a single observation. The backend replies with a bare label;
    /// the full `Prediction` record (id, timestamp) is assembled here.
    #[instrument(skip(self))]
    pub async fn classify(&self, input: &PredictionInput) -> Result<Prediction> {
        let response = self
            .http
            .post(self.url("predict"))
            .json(input)
            .send()
            .await?;
        let envelope: PredictEnvelope = Self::check(response).await?.json().await?;
        Ok(Prediction {
            id: Uuid::new_v4(),
            input: *input,
            classification: Classification::parse(&envelope.prediction),
            confidence: envelope.confidence,
            timestamp: Utc::now(),
            model_version: envelope.model_version.unwrap_or_default(),
        })
    }

    #[instrument(skip(self, bytes))]
    pub async fn classify_batch(&self, filename: &str, bytes: Vec<u8>) -> Result<BatchOutcome> {
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(self.url("predict/batch"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    #[instrument(skip(self, bytes))]
    pub async fn upload_dataset(&self, filename: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        let form = multipart::Form::new()
            .part("file", multipart::Part::bytes(bytes).file_name(filename.to_string()));
        let response = self
            .http
            .post(self.url("upload"))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    #[instrument(skip(self))]
    pub async fn train(&self, config: &TrainingConfig) -> Result<()> {
        let response = self
            .http
            .post(self.url("train"))
            .json(config)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join_handles_slashes() {
        let client = ApiClient::new("http://localhost:8000/api/");
        assert_eq!(client.url("/stats"), "http://localhost:8000/api/stats");
        assert_eq!(client.url("data/sample"), "http://localhost:8000/api/data/sample");
    }

    #[test]
    fn test_records_envelope_accepts_both_shapes() {
        let wrapped = r#"{"columns": ["pl_name"], "data": [{"pl_name": "X"}]}"#;
        let envelope: RecordsEnvelope = serde_json::from_str(wrapped).unwrap();
        assert_eq!(envelope.into_records().len(), 1);

        let bare = r#"[{"pl_name": "X"}, {"pl_name": "Y"}]"#;
        let envelope: RecordsEnvelope = serde_json::from_str(bare).unwrap();
        assert_eq!(envelope.into_records().len(), 2);
    }

    #[test]
    fn test_predict_envelope_minimal() {
        let json = r#"{"prediction": "Confirmed Exoplanet", "input": {"orbital_period": 1.0}}"#;
        let envelope: PredictEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(Classification::parse(&envelope.prediction), Classification::Confirmed);
        assert_eq!(envelope.confidence, None);
    }
}
