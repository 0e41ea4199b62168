//! Model training page: hyperparameter configuration and retrain trigger.

use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use serde::Deserialize;
use tracing::warn;

use exovision_common::model::{Hyperparameters, ModelType, TrainingConfig};

use crate::handlers::shell;
use crate::state::{ModelState, NoticeLevel, SharedState};

#[derive(Debug, Deserialize)]
pub struct TrainingForm {
    #[serde(default)]
    pub model_type: String,
    #[serde(default)]
    pub learning_rate: String,
    #[serde(default)]
    pub n_estimators: String,
    #[serde(default)]
    pub max_depth: String,
    #[serde(default)]
    pub batch_size: String,
    #[serde(default)]
    pub epochs: String,
    #[serde(default)]
    pub validation_split: String,
    #[serde(default)]
    pub test_split: String,
}

impl TrainingForm {
    /// Merge the submitted fields over the current config; unparseable
    /// values keep their previous setting.
    fn merged_into(&self, current: &TrainingConfig) -> TrainingConfig {
        let hp = &current.hyperparameters;
        TrainingConfig {
            model_type: ModelType::parse(&self.model_type).unwrap_or(current.model_type),
            hyperparameters: Hyperparameters {
                learning_rate: self.learning_rate.trim().parse().unwrap_or(hp.learning_rate),
                n_estimators: self.n_estimators.trim().parse().unwrap_or(hp.n_estimators),
                max_depth: self.max_depth.trim().parse().unwrap_or(hp.max_depth),
                batch_size: self.batch_size.trim().parse().unwrap_or(hp.batch_size),
                epochs: self.epochs.trim().parse().unwrap_or(hp.epochs),
            },
            validation_split: self.validation_split.trim().parse().unwrap_or(current.validation_split),
            test_split: self.test_split.trim().parse().unwrap_or(current.test_split),
        }
    }
}

pub async fn training_page(State(state): State<SharedState>) -> Html<String> {
    let model = state.model().await;
    let main = page_body(&model);
    Html(shell(&state, "Model Training", "/training", main).await)
}

pub async fn update_config(
    State(state): State<SharedState>,
    Form(form): Form<TrainingForm>,
) -> Redirect {
    let current = state.model().await.training;
    state.set_training_config(form.merged_into(&current)).await;
    state
        .push_notification(NoticeLevel::Info, "Training configuration updated")
        .await;
    Redirect::to("/training")
}

pub async fn reset_config(State(state): State<SharedState>) -> Redirect {
    state.reset_training_config().await;
    Redirect::to("/training")
}

pub async fn run_training(State(state): State<SharedState>) -> Redirect {
    let config = state.model().await.training;
    match state.api.train(&config).await {
        Ok(()) => {
            state.set_is_training(true).await;
            state
                .push_notification(NoticeLevel::Success, "Model retraining triggered")
                .await;
        }
        Err(err) => {
            warn!(%err, "train request failed");
            state
                .push_notification(NoticeLevel::Warning, format!("Training failed to start: {err}"))
                .await;
        }
    }
    Redirect::to("/training")
}

fn page_body(model: &ModelState) -> String {
    let hp = &model.training.hyperparameters;

    let model_options: String = [ModelType::RandomForest, ModelType::Xgboost, ModelType::NeuralNetwork]
        .iter()
        .map(|mt| {
            let selected = if *mt == model.selected_model { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{label}</option>"#,
                value = mt.as_str(),
                label = mt.label(),
            )
        })
        .collect();

    let status = if model.is_training {
        r#"<div class="alert alert-info">Training in progress — metrics update when the run completes.</div>"#
    } else {
        ""
    };

    format!(
        r#"<div class="page-header">
    <div>
        <h1 class="page-title">Model Training</h1>
        <p class="text-muted">Configure hyperparameters and retrain the classifier</p>
    </div>
</div>

{status}

<div class="card">
    <div class="card-header">Configuration</div>
    <form method="POST" action="/training/config" class="form-grid">
        <div class="form-field">
            <label for="model_type">Model Type</label>
            <select id="model_type" name="model_type" class="input-field">{model_options}</select>
        </div>
        <div class="form-field">
            <label for="learning_rate">Learning Rate</label>
            <input type="number" step="any" id="learning_rate" name="learning_rate" value="{learning_rate}" class="input-field">
        </div>
        <div class="form-field">
            <label for="n_estimators">Estimators</label>
            <input type="number" id="n_estimators" name="n_estimators" value="{n_estimators}" class="input-field">
        </div>
        <div class="form-field">
            <label for="max_depth">Max Depth</label>
            <input type="number" id="max_depth" name="max_depth" value="{max_depth}" class="input-field">
        </div>
        <div class="form-field">
            <label for="batch_size">Batch Size</label>
            <input type="number" id="batch_size" name="batch_size" value="{batch_size}" class="input-field">
        </div>
        <div class="form-field">
            <label for="epochs">Epochs</label>
            <input type="number" id="epochs" name="epochs" value="{epochs}" class="input-field">
        </div>
        <div class="form-field">
            <label for="validation_split">Validation Split</label>
            <input type="number" step="any" id="validation_split" name="validation_split" value="{validation_split}" class="input-field">
        </div>
        <div class="form-field">
            <label for="test_split">Test Split</label>
            <input type="number" step="any" id="test_split" name="test_split" value="{test_split}" class="input-field">
        </div>
        <div class="form-actions">
            <button type="submit" class="btn btn-primary">Save Configuration</button>
        </div>
    </form>
    <form method="POST" action="/training/reset" class="inline-form">
        <button type="submit" class="btn btn-outline btn-sm">Reset to Defaults</button>
    </form>
</div>

<div class="card">
    <div class="card-header">Run</div>
    <p class="text-muted">Retraining uses every dataset the backend has ingested. The current model keeps serving until the new one is promoted.</p>
    <form method="POST" action="/training/run">
        <button type="submit" class="btn btn-primary">Start Training</button>
    </form>
</div>"#,
        status = status,
        model_options = model_options,
        learning_rate = hp.learning_rate,
        n_estimators = hp.n_estimators,
        max_depth = hp.max_depth,
        batch_size = hp.batch_size,
        epochs = hp.epochs,
        validation_split = model.training.validation_split,
        test_split = model.training.test_split,
    )
}
