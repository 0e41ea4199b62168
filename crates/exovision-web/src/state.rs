//! Shared application state.
//!
//! All mutable UI state lives in three serializable slices behind the shared
//! `AppState`, mutated only through the named transition methods below —
//! handlers never reach into a slice directly. The catalog cache is a
//! `QueryState` refreshed by a background task; pages render whatever state
//! the cache is in.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use exovision_client::{ApiClient, CatalogProvider, QueryState};
use exovision_common::model::{ModelType, TrainingConfig};
use exovision_common::record::RawRecord;
use exovision_pipeline::SortSpec;

use crate::config::Config;

// ── UI slice ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

impl NoticeLevel {
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeLevel::Info    => "alert-info",
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Warning => "alert-warning",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Notification {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UiState {
    pub sidebar_collapsed: bool,
    pub theme: Theme,
    pub notifications: Vec<Notification>,
    next_notification_id: u64,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            sidebar_collapsed: false,
            theme: Theme::Dark,
            notifications: Vec::new(),
            next_notification_id: 1,
        }
    }
}

// ── Model slice ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize)]
pub struct ModelState {
    pub selected_model: ModelType,
    pub training: TrainingConfig,
    pub is_training: bool,
}

impl Default for ModelState {
    fn default() -> Self {
        Self {
            selected_model: ModelType::RandomForest,
            training: TrainingConfig::default(),
            is_training: false,
        }
    }
}

// ── Data slice ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct DataState {
    pub catalog: QueryState<Vec<RawRecord>>,
    pub sort: SortSpec,
    pub page: usize,
    pub search_query: String,
    pub selected_dataset: Option<String>,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            catalog: QueryState::Pending,
            sort: SortSpec::default(),
            page: 1,
            search_query: String::new(),
            selected_dataset: None,
        }
    }
}

// ── Shared state ──────────────────────────────────────────────────────────────

pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub provider: Arc<dyn CatalogProvider>,
    ui: RwLock<UiState>,
    model: RwLock<ModelState>,
    data: RwLock<DataState>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: Config, api: ApiClient, provider: Arc<dyn CatalogProvider>) -> Self {
        Self {
            config,
            api,
            provider,
            ui: RwLock::new(UiState::default()),
            model: RwLock::new(ModelState::default()),
            data: RwLock::new(DataState::default()),
        }
    }

    // ── Snapshots ────────────────────────────────────────────────────────────

    pub async fn ui(&self) -> UiState {
        self.ui.read().await.clone()
    }

    pub async fn model(&self) -> ModelState {
        self.model.read().await.clone()
    }

    pub async fn data(&self) -> DataState {
        self.data.read().await.clone()
    }

    // ── UI transitions ───────────────────────────────────────────────────────

    pub async fn toggle_sidebar(&self) {
        let mut ui = self.ui.write().await;
        ui.sidebar_collapsed = !ui.sidebar_collapsed;
    }

    pub async fn toggle_theme(&self) {
        let mut ui = self.ui.write().await;
        ui.theme = match ui.theme {
            Theme::Dark  => Theme::Light,
            Theme::Light => Theme::Dark,
        };
    }

    pub async fn push_notification(&self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        let mut ui = self.ui.write().await;
        let id = ui.next_notification_id;
        ui.next_notification_id += 1;
        ui.notifications.push(Notification {
            id,
            level,
            message: message.into(),
            created_at: Utc::now(),
        });
        id
    }

    pub async fn dismiss_notification(&self, id: u64) {
        let mut ui = self.ui.write().await;
        ui.notifications.retain(|n| n.id != id);
    }

    pub async fn clear_notifications(&self) {
        self.ui.write().await.notifications.clear();
    }

    // ── Model transitions ────────────────────────────────────────────────────

    pub async fn set_model_type(&self, model_type: ModelType) {
        let mut model = self.model.write().await;
        model.selected_model = model_type;
        model.training.model_type = model_type;
    }

    pub async fn set_training_config(&self, training: TrainingConfig) {
        let mut model = self.model.write().await;
        model.selected_model = training.model_type;
        model.training = training;
    }

    pub async fn reset_training_config(&self) {
        let mut model = self.model.write().await;
        model.training = TrainingConfig::default();
        model.selected_model = model.training.model_type;
    }

    pub async fn set_is_training(&self, is_training: bool) {
        self.model.write().await.is_training = is_training;
    }

    // ── Data transitions ─────────────────────────────────────────────────────

    pub async fn set_sort(&self, sort: SortSpec) {
        let mut data = self.data.write().await;
        data.sort = sort;
        // A new ordering invalidates the page position.
        data.page = 1;
    }

    pub async fn set_page(&self, page: usize) {
        self.data.write().await.page = page.max(1);
    }

    pub async fn set_search_query(&self, query: impl Into<String>) {
        let mut data = self.data.write().await;
        data.search_query = query.into();
        data.page = 1;
    }

    pub async fn select_dataset(&self, id: Option<String>) {
        self.data.write().await.selected_dataset = id;
    }

    pub async fn set_catalog(&self, catalog: QueryState<Vec<RawRecord>>) {
        self.data.write().await.catalog = catalog;
    }

    // ── Catalog cache refresh ────────────────────────────────────────────────

    /// Fetch the catalog in the background and swap it into the cache. Only
    /// the first load shows Pending; a refresh keeps serving the previous
    /// payload until the new one lands.
    pub fn spawn_catalog_refresh(self: Arc<Self>) {
        let state = self;
        tokio::spawn(async move {
            {
                let mut data = state.data.write().await;
                if !data.catalog.is_ready() {
                    data.catalog = QueryState::Pending;
                }
            }
            let fetched = state.provider.catalog().await;
            info!(
                ready = fetched.is_ready(),
                failed = fetched.is_failed(),
                "catalog refresh finished"
            );
            state.data.write().await.catalog = fetched;
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exovision_client::MockProvider;
    use exovision_pipeline::{SortDirection, SortField};

    fn test_state() -> AppState {
        AppState::new(
            Config::default(),
            ApiClient::new("http://127.0.0.1:1/api"),
            Arc::new(MockProvider::new()),
        )
    }

    #[tokio::test]
    async fn test_sidebar_and_theme_toggles() {
        let state = test_state();
        assert!(!state.ui().await.sidebar_collapsed);
        state.toggle_sidebar().await;
        assert!(state.ui().await.sidebar_collapsed);

        assert_eq!(state.ui().await.theme, Theme::Dark);
        state.toggle_theme().await;
        assert_eq!(state.ui().await.theme, Theme::Light);
    }

    #[tokio::test]
    async fn test_notifications_push_and_dismiss() {
        let state = test_state();
        let first = state.push_notification(NoticeLevel::Info, "one").await;
        let second = state.push_notification(NoticeLevel::Warning, "two").await;
        assert_ne!(first, second);
        assert_eq!(state.ui().await.notifications.len(), 2);

        state.dismiss_notification(first).await;
        let ui = state.ui().await;
        assert_eq!(ui.notifications.len(), 1);
        assert_eq!(ui.notifications[0].id, second);

        state.clear_notifications().await;
        assert!(state.ui().await.notifications.is_empty());
    }

    #[tokio::test]
    async fn test_sort_transition_resets_page() {
        let state = test_state();
        state.set_page(4).await;
        assert_eq!(state.data().await.page, 4);

        state
            .set_sort(SortSpec {
                field: SortField::Confidence,
                direction: SortDirection::Descending,
            })
            .await;
        let data = state.data().await;
        assert_eq!(data.sort.field, SortField::Confidence);
        assert_eq!(data.page, 1);
    }

    #[tokio::test]
    async fn test_page_transition_floors_at_one() {
        let state = test_state();
        state.set_page(0).await;
        assert_eq!(state.data().await.page, 1);
    }

    #[tokio::test]
    async fn test_model_type_transition_updates_training_config() {
        let state = test_state();
        state.set_model_type(ModelType::Xgboost).await;
        let model = state.model().await;
        assert_eq!(model.selected_model, ModelType::Xgboost);
        assert_eq!(model.training.model_type, ModelType::Xgboost);

        state.reset_training_config().await;
        assert_eq!(state.model().await.selected_model, ModelType::RandomForest);
    }

    #[tokio::test]
    async fn test_catalog_starts_pending() {
        let state = test_state();
        assert!(state.data().await.catalog.is_pending());
    }
}
