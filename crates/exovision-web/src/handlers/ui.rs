//! UI state transitions: sidebar, theme, and notification dismissal.
//! Each POST applies one declared transition and redirects back to the page
//! it came from.

use axum::{
    extract::State,
    response::Redirect,
    Form,
};
use serde::Deserialize;

use crate::state::SharedState;

#[derive(Debug, Deserialize)]
pub struct ReturnTo {
    #[serde(default)]
    pub next: Option<String>,
}

/// Only same-site paths are followed; anything else falls back to the
/// dashboard.
fn sanitize_next(next: Option<&str>) -> &str {
    match next {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/",
    }
}

pub async fn toggle_sidebar(
    State(state): State<SharedState>,
    Form(form): Form<ReturnTo>,
) -> Redirect {
    state.toggle_sidebar().await;
    Redirect::to(sanitize_next(form.next.as_deref()))
}

pub async fn toggle_theme(
    State(state): State<SharedState>,
    Form(form): Form<ReturnTo>,
) -> Redirect {
    state.toggle_theme().await;
    Redirect::to(sanitize_next(form.next.as_deref()))
}

#[derive(Debug, Deserialize)]
pub struct DismissForm {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub next: Option<String>,
}

pub async fn dismiss_notification(
    State(state): State<SharedState>,
    Form(form): Form<DismissForm>,
) -> Redirect {
    if let Ok(id) = form.id.parse::<u64>() {
        state.dismiss_notification(id).await;
    }
    Redirect::to(sanitize_next(form.next.as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_next_accepts_site_paths_only() {
        assert_eq!(sanitize_next(Some("/data")), "/data");
        assert_eq!(sanitize_next(Some("/training")), "/training");
        assert_eq!(sanitize_next(Some("//evil.example")), "/");
        assert_eq!(sanitize_next(Some("https://evil.example")), "/");
        assert_eq!(sanitize_next(None), "/");
    }
}
