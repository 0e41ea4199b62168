//! Page handlers and shared rendering helpers.

pub mod analytics;
pub mod api;
pub mod classify;
pub mod dashboard;
pub mod data;
pub mod training;
pub mod ui;

use exovision_common::record::Classification;

use crate::state::{AppState, Theme, UiState};

/// Navigation HTML shared across all pages.
pub const NAV_HTML: &str = include_str!("../../templates/nav.html");

/// Wrap a page body in the common document shell: doctype, stylesheet, nav
/// sidebar, and any pending notifications as dismissible banners.
pub async fn shell(state: &AppState, title: &str, path: &str, main: String) -> String {
    let ui = state.ui().await;
    let theme_class = match ui.theme {
        Theme::Dark  => "theme-dark",
        Theme::Light => "theme-light",
    };
    let sidebar_class = if ui.sidebar_collapsed { "app-container sidebar-collapsed" } else { "app-container" };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>{title} — ExoVision</title>
    <link rel="stylesheet" href="/static/css/main.css">
</head>
<body class="{theme_class}">
<div class="{sidebar_class}">
{nav}
<main class="main-content">
{notices}
{main}
</main>
</div>
</body>
</html>"#,
        title = title,
        theme_class = theme_class,
        sidebar_class = sidebar_class,
        nav = NAV_HTML,
        notices = render_notices(&ui, path),
        main = main,
    )
}

fn render_notices(ui: &UiState, path: &str) -> String {
    ui.notifications
        .iter()
        .map(|n| {
            format!(
                r#"<div class="alert {class}">
    {message}
    <form method="POST" action="/ui/notifications/dismiss" class="inline-form">
        <input type="hidden" name="id" value="{id}">
        <input type="hidden" name="next" value="{path}">
        <button type="submit" class="btn-close" aria-label="Dismiss">&times;</button>
    </form>
</div>"#,
                class = n.level.css_class(),
                message = escape(&n.message),
                id = n.id,
                path = path,
            )
        })
        .collect()
}

/// Minimal HTML escaping for user- or backend-supplied text.
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub fn classification_badge(classification: Classification) -> String {
    let class = match classification {
        Classification::Confirmed     => "badge badge-confirmed",
        Classification::Candidate     => "badge badge-candidate",
        Classification::FalsePositive => "badge badge-false-positive",
        Classification::Unknown       => "badge badge-unknown",
    };
    format!(r#"<span class="{}">{}</span>"#, class, classification)
}

/// Confidence cell: percent when known, an em-dash when the backend did not
/// report one.
pub fn confidence_cell(confidence: Option<f64>) -> String {
    match confidence {
        Some(c) => format!("{:.0}%", c * 100.0),
        None    => "—".to_string(),
    }
}

/// Standard placeholder for a query that has not resolved yet.
pub fn loading_placeholder(what: &str) -> String {
    format!(
        r#"<div class="placeholder placeholder-loading">
    <p>Loading {what}…</p>
</div>"#
    )
}

/// Standard placeholder for a failed query. The transport detail goes to the
/// log, not the page.
pub fn error_placeholder(what: &str) -> String {
    format!(
        r#"<div class="placeholder placeholder-error">
    <p>Failed to load {what}</p>
    <p class="text-muted">Check your backend connection</p>
</div>"#
    )
}

/// Standard empty-collection placeholder.
pub fn empty_placeholder(what: &str, hint: &str) -> String {
    format!(
        r#"<div class="placeholder">
    <p>No {what} available</p>
    <p class="text-muted">{hint}</p>
</div>"#
    )
}
