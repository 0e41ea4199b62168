//! Single-observation classification form.

use axum::{
    extract::State,
    response::Html,
    Form,
};
use serde::Deserialize;
use tracing::warn;

use exovision_common::model::{Prediction, PredictionInput};

use crate::handlers::{classification_badge, confidence_cell, shell};
use crate::state::{NoticeLevel, SharedState};

/// Form fields arrive as strings; anything unparseable falls back to 0.0,
/// matching the permissive defaulting the rest of the pipeline applies.
#[derive(Debug, Default, Deserialize)]
pub struct ClassifyForm {
    #[serde(default)]
    pub orbital_period: String,
    #[serde(default)]
    pub transit_duration: String,
    #[serde(default)]
    pub planetary_radius: String,
    #[serde(default)]
    pub stellar_radius: String,
    #[serde(default)]
    pub effective_temperature: String,
}

impl ClassifyForm {
    fn to_input(&self) -> PredictionInput {
        PredictionInput {
            orbital_period: parse_or_zero(&self.orbital_period),
            transit_duration: parse_or_zero(&self.transit_duration),
            planet_radius: parse_or_zero(&self.planetary_radius),
            stellar_radius: parse_or_zero(&self.stellar_radius),
            stellar_temp: parse_or_zero(&self.effective_temperature),
        }
    }
}

fn parse_or_zero(s: &str) -> f64 {
    s.trim().parse().unwrap_or(0.0)
}

pub async fn classify_page(State(state): State<SharedState>) -> Html<String> {
    let main = page_body(&ClassifyForm::default(), None);
    Html(shell(&state, "Classification", "/classify", main).await)
}

pub async fn classify_submit(
    State(state): State<SharedState>,
    Form(form): Form<ClassifyForm>,
) -> Html<String> {
    let input = form.to_input();
    let result = match state.api.classify(&input).await {
        Ok(prediction) => Some(prediction),
        Err(err) => {
            warn!(%err, "classification request failed");
            state
                .push_notification(NoticeLevel::Warning, format!("Classification failed: {err}"))
                .await;
            None
        }
    };

    let main = page_body(&form, result.as_ref());
    Html(shell(&state, "Classification", "/classify", main).await)
}

fn page_body(form: &ClassifyForm, result: Option<&Prediction>) -> String {
    let result_html = match result {
        Some(prediction) => {
            let confidence_bar = prediction
                .confidence
                .map(|c| {
                    let pct = (c * 100.0).clamp(0.0, 100.0) as u32;
                    format!(
                        r#"<div class="progress-track">
    <div class="progress-bar" style="width:{pct}%"></div>
</div>"#
                    )
                })
                .unwrap_or_default();
            format!(
                r#"<div class="card result-card">
    <div class="card-header">Result</div>
    <div class="result-classification">{badge}</div>
    <div class="result-confidence">
        <span class="text-muted">Confidence: {confidence}</span>
        {bar}
    </div>
</div>"#,
                badge = classification_badge(prediction.classification),
                confidence = confidence_cell(prediction.confidence),
                bar = confidence_bar,
            )
        }
        None => String::new(),
    };

    let fields = [
        ("orbital_period", "Orbital Period (days)", "e.g., 365.25", &form.orbital_period),
        ("transit_duration", "Transit Duration (hours)", "e.g., 2.5", &form.transit_duration),
        ("planetary_radius", "Planetary Radius (Earth radii)", "e.g., 1.5", &form.planetary_radius),
        ("stellar_radius", "Stellar Radius (Solar radii)", "e.g., 1.0", &form.stellar_radius),
        ("effective_temperature", "Effective Temperature (K)", "e.g., 5800", &form.effective_temperature),
    ];
    let inputs: String = fields
        .iter()
        .map(|(name, label, placeholder, value)| {
            format!(
                r#"<div class="form-field">
    <label for="{name}">{label}</label>
    <input type="number" step="any" id="{name}" name="{name}" value="{value}" placeholder="{placeholder}" class="input-field">
</div>"#,
                name = name,
                label = label,
                placeholder = placeholder,
                value = crate::handlers::escape(value),
            )
        })
        .collect();

    format!(
        r#"<div class="page-header">
    <div>
        <h1 class="page-title">Classification</h1>
        <p class="text-muted">Classify a single exoplanet observation</p>
    </div>
</div>

<div class="card">
    <div class="card-header">Single Observation</div>
    <form method="POST" action="/classify" class="form-grid">
        {inputs}
        <div class="form-actions">
            <button type="submit" class="btn btn-primary">Classify</button>
        </div>
    </form>
</div>
{result}"#,
        inputs = inputs,
        result = result_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_parsing_is_total() {
        let form = ClassifyForm {
            orbital_period: "384.8".to_string(),
            transit_duration: "".to_string(),
            planetary_radius: "not a number".to_string(),
            stellar_radius: " 1.05 ".to_string(),
            effective_temperature: "5757".to_string(),
        };
        let input = form.to_input();
        assert_eq!(input.orbital_period, 384.8);
        assert_eq!(input.transit_duration, 0.0);
        assert_eq!(input.planet_radius, 0.0);
        assert_eq!(input.stellar_radius, 1.05);
        assert_eq!(input.stellar_temp, 5757.0);
    }
}
