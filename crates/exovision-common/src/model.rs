/// Model-side types: statistics, predictions, training configuration, and
/// the upload/batch envelopes the backend returns for mutations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::record::Classification;

// ---------------------------------------------------------------------------
// Model statistics
// ---------------------------------------------------------------------------

/// Aggregate model metrics as reported by `/api/stats`. The backend only
/// guarantees accuracy/precision/recall/version; everything else defaults so
/// older backend builds still deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelStats {
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    #[serde(alias = "f1Score")]
    pub f1_score: f64,
    pub total_predictions: u64,
    #[serde(alias = "version")]
    pub model_version: String,
    pub last_trained: Option<DateTime<Utc>>,
    pub training_data_size: u64,
}

/// One timestamped row of the performance history, for the analytics page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceSnapshot {
    pub timestamp: DateTime<Utc>,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub model_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfusionMatrix {
    pub true_positives: u64,
    pub false_positives: u64,
    pub true_negatives: u64,
    pub false_negatives: u64,
    pub labels: Vec<Classification>,
}

// ---------------------------------------------------------------------------
// Predictions
// ---------------------------------------------------------------------------

/// The five features the model was trained on. Field names match the
/// backend's `PredictInput` schema exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionInput {
    pub orbital_period: f64,
    pub transit_duration: f64,
    pub planet_radius: f64,
    pub stellar_temp: f64,
    pub stellar_radius: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: Uuid,
    pub input: PredictionInput,
    pub classification: Classification,
    pub confidence: Option<f64>,
    pub timestamp: DateTime<Utc>,
    pub model_version: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchOutcome {
    pub results: Vec<Prediction>,
    pub total_processed: u64,
    pub success_count: u64,
    pub error_count: u64,
    pub processing_time_ms: u64,
}

// ---------------------------------------------------------------------------
// Training configuration
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    RandomForest,
    Xgboost,
    NeuralNetwork,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelType::RandomForest  => "random_forest",
            ModelType::Xgboost       => "xgboost",
            ModelType::NeuralNetwork => "neural_network",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelType::RandomForest  => "Random Forest",
            ModelType::Xgboost       => "XGBoost",
            ModelType::NeuralNetwork => "Neural Network",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "random_forest"  => Some(ModelType::RandomForest),
            "xgboost"        => Some(ModelType::Xgboost),
            "neural_network" => Some(ModelType::NeuralNetwork),
            _                => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hyperparameters {
    pub learning_rate: f64,
    pub n_estimators: u32,
    pub max_depth: u32,
    pub batch_size: u32,
    pub epochs: u32,
}

impl Default for Hyperparameters {
    fn default() -> Self {
        Self {
            learning_rate: 0.01,
            n_estimators: 100,
            max_depth: 10,
            batch_size: 32,
            epochs: 50,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    pub model_type: ModelType,
    pub hyperparameters: Hyperparameters,
    pub validation_split: f64,
    pub test_split: f64,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::RandomForest,
            hyperparameters: Hyperparameters::default(),
            validation_split: 0.2,
            test_split: 0.1,
        }
    }
}

// ---------------------------------------------------------------------------
// Datasets & uploads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetStatus {
    Processing,
    Ready,
    Error,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSummary {
    pub id: String,
    pub name: String,
    /// Megabytes; 0.0 when the backend does not report a size.
    pub size_mb: f64,
    pub upload_date: Option<DateTime<Utc>>,
    pub format: String,
    pub status: DatasetStatus,
    pub records: u64,
}

impl Default for DatasetSummary {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            size_mb: 0.0,
            upload_date: None,
            format: "csv".to_string(),
            status: DatasetStatus::Ready,
            records: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadReceipt {
    #[serde(alias = "datasetId")]
    pub dataset_id: String,
    pub filename: String,
    #[serde(alias = "rows")]
    pub records: u64,
    pub message: Option<String>,
}
