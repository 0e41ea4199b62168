//! Dashboard handler — landing page with model overview.

use axum::{extract::State, response::Html};

use exovision_client::QueryState;
use exovision_common::model::ModelStats;
use exovision_common::record::Exoplanet;
use exovision_pipeline::normalize;

use crate::handlers::{
    classification_badge, confidence_cell, empty_placeholder, error_placeholder,
    loading_placeholder, shell,
};
use crate::state::SharedState;

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let stats = state.provider.model_stats().await;
    let data = state.data().await;
    let recent_limit = state.config.display.recent_predictions;

    let main = format!(
        r#"<div class="page-header">
    <div>
        <h1 class="page-title">Dashboard</h1>
        <p class="text-muted">Monitor your model performance and exoplanet classification system</p>
    </div>
    <form method="POST" action="/data/refresh">
        <button type="submit" class="btn btn-outline">Refresh Data</button>
    </form>
</div>

{stats}

<div class="grid-2">
    <div class="card">
        <div class="card-header">Recent Predictions</div>
        {recent}
    </div>
    <div class="card">
        <div class="card-header">Quick Actions</div>
        <div class="quick-actions">
            <a href="/data" class="action-card">
                <div class="action-title">Upload Dataset</div>
                <p class="text-muted">Send a CSV catalog to the backend for classification</p>
            </a>
            <a href="/classify" class="action-card">
                <div class="action-title">Classify Observation</div>
                <p class="text-muted">Run a single observation through the model</p>
            </a>
            <a href="/training" class="action-card">
                <div class="action-title">Configure Training</div>
                <p class="text-muted">Tune hyperparameters and trigger retraining</p>
            </a>
        </div>
    </div>
</div>"#,
        stats = render_stat_cards(&stats),
        recent = render_recent(&data.catalog.clone().map(|raws| normalize::catalog(&raws)), recent_limit),
    );

    Html(shell(&state, "Dashboard", "/", main).await)
}

fn render_stat_cards(stats: &QueryState<ModelStats>) -> String {
    let stats = match stats {
        QueryState::Ready(stats) => stats.clone(),
        QueryState::Pending      => return loading_placeholder("model statistics"),
        QueryState::Failed(_)    => return error_placeholder("model statistics"),
    };

    let cards = [
        ("F1 Score", format!("{:.2}", stats.f1_score)),
        ("Accuracy", format!("{:.1}%", stats.accuracy * 100.0)),
        ("Total Predictions", format_count(stats.total_predictions)),
        ("Training Data", format_count(stats.training_data_size)),
        ("Model Version", if stats.model_version.is_empty() { "—".to_string() } else { stats.model_version.clone() }),
    ];

    let cells: String = cards
        .iter()
        .map(|(label, value)| {
            format!(
                r#"<div class="stat-card">
    <div class="stat-value">{value}</div>
    <div class="stat-label">{label}</div>
</div>"#
            )
        })
        .collect();

    format!(r#"<div class="stats-grid">{cells}</div>"#)
}

fn render_recent(catalog: &QueryState<Vec<Exoplanet>>, limit: usize) -> String {
    let records = match catalog {
        QueryState::Ready(records) => records,
        QueryState::Pending        => return loading_placeholder("predictions"),
        QueryState::Failed(_)      => return error_placeholder("predictions"),
    };
    if records.is_empty() {
        return empty_placeholder("predictions", "Upload data to see predictions");
    }

    let rows: String = records
        .iter()
        .take(limit)
        .map(|record| {
            format!(
                r#"<li class="prediction-row">
    <div>
        <span class="prediction-name">{name}</span>
        {badge}
    </div>
    <div class="prediction-meta">
        <span>{period:.1} days</span>
        <span class="text-muted">confidence {confidence}</span>
    </div>
</li>"#,
                name = crate::handlers::escape(&record.name),
                badge = classification_badge(record.classification),
                period = record.orbital_period,
                confidence = confidence_cell(record.confidence),
            )
        })
        .collect();

    format!(r#"<ul class="prediction-list">{rows}</ul>"#)
}

fn format_count(n: u64) -> String {
    // 15472 → "15,472"
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(15_472), "15,472");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
