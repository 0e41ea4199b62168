//! JSON endpoints backing the pages. All of them render from the same
//! normalized records the HTML views use; "no data" serializes as an empty
//! collection, not an error.

use axum::{extract::State, response::Json};

use exovision_common::model::ModelStats;
use exovision_common::record::Exoplanet;
use exovision_pipeline::{correlate, normalize, CorrelationMatrix, Feature};

use crate::state::SharedState;

/// GET /api/catalog - normalized display records
pub async fn catalog(State(state): State<SharedState>) -> Json<Vec<Exoplanet>> {
    let data = state.data().await;
    Json(normalize::catalog(data.catalog.records()))
}

/// GET /api/stats - current model statistics
pub async fn stats(State(state): State<SharedState>) -> Json<ModelStats> {
    let stats = state.provider.model_stats().await;
    Json(stats.ready().cloned().unwrap_or_default())
}

/// GET /api/correlation - feature correlation matrix over the catalog
pub async fn correlation(State(state): State<SharedState>) -> Json<CorrelationMatrix> {
    let data = state.data().await;
    let records = normalize::catalog(data.catalog.records());
    Json(correlate::matrix(&records, &Feature::ALL))
}
