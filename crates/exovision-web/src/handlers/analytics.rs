//! Analytics page: feature correlation matrix, confusion matrix, and
//! performance history.

use axum::{extract::State, response::Html};

use exovision_client::QueryState;
use exovision_common::model::{ConfusionMatrix, PerformanceSnapshot};
use exovision_pipeline::{correlate, normalize, CorrelationMatrix, Feature};

use crate::handlers::{empty_placeholder, error_placeholder, loading_placeholder, shell};
use crate::state::SharedState;

pub async fn analytics_page(State(state): State<SharedState>) -> Html<String> {
    let data = state.data().await;
    let history = state.provider.performance_history().await;
    let confusion = state.provider.confusion_matrix().await;

    let correlation_html = match &data.catalog {
        QueryState::Pending   => loading_placeholder("catalog"),
        QueryState::Failed(_) => error_placeholder("catalog"),
        QueryState::Ready(raws) => {
            let records = normalize::catalog(raws);
            if records.is_empty() {
                empty_placeholder("records", "Upload data to compute correlations")
            } else {
                render_correlation(&correlate::matrix(&records, &Feature::ALL))
            }
        }
    };

    let main = format!(
        r#"<div class="page-header">
    <div>
        <h1 class="page-title">Analytics</h1>
        <p class="text-muted">Model performance and exoplanet data insights</p>
    </div>
</div>

<div class="card">
    <div class="card-header">Feature Correlation Matrix</div>
    {correlation}
</div>

<div class="grid-2">
    <div class="card">
        <div class="card-header">Confusion Matrix</div>
        {confusion}
    </div>
    <div class="card">
        <div class="card-header">Performance History</div>
        {history}
    </div>
</div>"#,
        correlation = correlation_html,
        confusion = render_confusion(&confusion),
        history = render_history(&history),
    );

    Html(shell(&state, "Analytics", "/analytics", main).await)
}

/// |r| bucket → cell class, mirroring the legend below.
fn correlation_class(r: f64) -> &'static str {
    let strength = r.abs();
    if strength >= 0.8 {
        "corr corr-strong"
    } else if strength >= 0.6 {
        "corr corr-moderate"
    } else if strength >= 0.4 {
        "corr corr-weak"
    } else if strength >= 0.2 {
        "corr corr-very-weak"
    } else {
        "corr corr-none"
    }
}

fn render_correlation(matrix: &CorrelationMatrix) -> String {
    let header: String = matrix
        .features()
        .iter()
        .map(|f| format!(r#"<th class="corr-label">{}</th>"#, f.label()))
        .collect();

    let rows: String = matrix
        .features()
        .iter()
        .enumerate()
        .map(|(i, feature)| {
            let cells: String = (0..matrix.len())
                .map(|j| {
                    let r = matrix.coefficient(i, j);
                    format!(
                        r#"<td class="{class}" title="{row} vs {col}: {r:.3}">{r:.2}</td>"#,
                        class = correlation_class(r),
                        row = feature.label(),
                        col = matrix.features()[j].label(),
                        r = r,
                    )
                })
                .collect();
            format!(
                r#"<tr><th class="corr-label">{label}</th>{cells}</tr>"#,
                label = feature.label(),
                cells = cells,
            )
        })
        .collect();

    format!(
        r#"<div class="table-container">
    <table class="corr-table">
        <thead><tr><th></th>{header}</tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>
<div class="corr-legend">
    <span><i class="swatch corr-strong"></i> Strong (&ge;0.8)</span>
    <span><i class="swatch corr-moderate"></i> Moderate (0.6&ndash;0.8)</span>
    <span><i class="swatch corr-weak"></i> Weak (0.4&ndash;0.6)</span>
    <span><i class="swatch corr-very-weak"></i> Very Weak (0.2&ndash;0.4)</span>
    <span><i class="swatch corr-none"></i> None (&lt;0.2)</span>
</div>"#
    )
}

fn render_confusion(confusion: &QueryState<ConfusionMatrix>) -> String {
    let cm = match confusion {
        QueryState::Ready(cm) => cm,
        QueryState::Pending   => return loading_placeholder("confusion matrix"),
        QueryState::Failed(_) => return error_placeholder("confusion matrix"),
    };
    format!(
        r#"<div class="table-container">
    <table class="table confusion-table">
        <thead><tr><th></th><th>Predicted Planet</th><th>Predicted Non-Planet</th></tr></thead>
        <tbody>
            <tr><th>Actual Planet</th><td class="cm-good">{tp}</td><td class="cm-bad">{fne}</td></tr>
            <tr><th>Actual Non-Planet</th><td class="cm-bad">{fp}</td><td class="cm-good">{tn}</td></tr>
        </tbody>
    </table>
</div>"#,
        tp = cm.true_positives,
        fne = cm.false_negatives,
        fp = cm.false_positives,
        tn = cm.true_negatives,
    )
}

fn render_history(history: &QueryState<Vec<PerformanceSnapshot>>) -> String {
    let snapshots = match history {
        QueryState::Ready(snapshots) => snapshots,
        QueryState::Pending          => return loading_placeholder("performance history"),
        QueryState::Failed(_)        => return error_placeholder("performance history"),
    };
    if snapshots.is_empty() {
        return empty_placeholder("history", "Metrics appear after the first training run");
    }

    let rows: String = snapshots
        .iter()
        .map(|s| {
            format!(
                r#"<tr>
    <td class="text-muted">{date}</td>
    <td>{accuracy:.3}</td>
    <td>{precision:.3}</td>
    <td>{recall:.3}</td>
    <td>{f1:.3}</td>
    <td class="text-muted">{version}</td>
</tr>"#,
                date = s.timestamp.format("%Y-%m-%d"),
                accuracy = s.accuracy,
                precision = s.precision,
                recall = s.recall,
                f1 = s.f1_score,
                version = crate::handlers::escape(&s.model_version),
            )
        })
        .collect();

    format!(
        r#"<div class="table-container">
    <table class="table">
        <thead><tr><th>Date</th><th>Accuracy</th><th>Precision</th><th>Recall</th><th>F1</th><th>Version</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>"#
    )
}
