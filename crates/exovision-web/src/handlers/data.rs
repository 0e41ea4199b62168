//! Data management page: catalog browser with sortable columns and
//! pagination, dataset summaries, and CSV upload.

use axum::{
    extract::{Multipart, Query, State},
    response::{Html, Redirect},
};
use serde::Deserialize;
use tracing::warn;

use exovision_client::QueryState;
use exovision_common::model::DatasetSummary;
use exovision_common::record::Exoplanet;
use exovision_pipeline::{normalize, paginate, sort};
use exovision_pipeline::{SortDirection, SortField, SortSpec};

use crate::handlers::{
    classification_badge, confidence_cell, empty_placeholder, error_placeholder, escape,
    loading_placeholder, shell,
};
use crate::state::{NoticeLevel, SharedState};

#[derive(Debug, Default, Deserialize)]
pub struct CatalogQuery {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<usize>,
    pub q: Option<String>,
}

pub async fn data_page(
    State(state): State<SharedState>,
    Query(query): Query<CatalogQuery>,
) -> Html<String> {
    // Fold the query parameters into the data slice through its declared
    // transitions, then render purely from the resulting snapshot.
    if let Some(key) = query.sort.as_deref() {
        if let Some(field) = SortField::parse(key) {
            let direction = query
                .dir
                .as_deref()
                .and_then(SortDirection::parse)
                .unwrap_or(SortDirection::Ascending);
            state.set_sort(SortSpec { field, direction }).await;
        }
    }
    if let Some(q) = query.q.as_deref() {
        state.set_search_query(q).await;
    }
    if let Some(page) = query.page {
        state.set_page(page).await;
    }

    let data = state.data().await;
    let datasets = state.provider.datasets().await;
    let page_size = state.config.display.page_size;

    let catalog_html = match &data.catalog {
        QueryState::Pending   => loading_placeholder("catalog"),
        QueryState::Failed(_) => error_placeholder("catalog"),
        QueryState::Ready(raws) => {
            let mut records = normalize::catalog(raws);
            if !data.search_query.is_empty() {
                let needle = data.search_query.to_lowercase();
                records.retain(|r| r.name.to_lowercase().contains(&needle));
            }
            sort::sort_records(&mut records, data.sort);
            render_catalog(&records, data.sort, &data.search_query, page_size, data.page)
        }
    };

    let main = format!(
        r#"<div class="page-header">
    <div>
        <h1 class="page-title">Data Management</h1>
        <p class="text-muted">Browse the exoplanet catalog and upload new datasets</p>
    </div>
    <form method="GET" action="/data" class="search-form">
        <input type="text" name="q" value="{q}" placeholder="Search by name…" class="input-field">
        <button type="submit" class="btn btn-outline">Search</button>
    </form>
</div>

<div class="card">
    <div class="card-header">Exoplanet Catalog</div>
    {catalog}
</div>

<div class="grid-2">
    <div class="card">
        <div class="card-header">Uploaded Datasets</div>
        {datasets}
    </div>
    <div class="card">
        <div class="card-header">Upload Dataset</div>
        <p class="text-muted">CSV catalogs are forwarded to the backend, classified, and merged into the catalog.</p>
        <form method="POST" action="/data/upload" enctype="multipart/form-data" class="upload-form">
            <input type="file" name="file" accept=".csv" required>
            <button type="submit" class="btn btn-primary">Upload</button>
        </form>
    </div>
</div>"#,
        q = escape(&data.search_query),
        catalog = catalog_html,
        datasets = render_datasets(&datasets),
    );

    Html(shell(&state, "Data Management", "/data", main).await)
}

fn render_catalog(
    records: &[Exoplanet],
    active: SortSpec,
    search_query: &str,
    page_size: usize,
    requested_page: usize,
) -> String {
    if records.is_empty() {
        return if search_query.is_empty() {
            empty_placeholder("records", "Upload data to populate the catalog")
        } else {
            empty_placeholder("matching records", "Try a different search")
        };
    }

    // Clamp before paginating; the pagination controls below never link past
    // the boundaries, but the page number also arrives via the URL.
    let total_pages = paginate::total_pages(records.len(), page_size);
    let page = requested_page.min(total_pages);
    let window = paginate::paginate(records, page_size, page);

    let header: String = [
        (SortField::Name, "Name"),
        (SortField::OrbitalPeriod, "Period (days)"),
        (SortField::TransitDuration, "Duration (hrs)"),
        (SortField::PlanetaryRadius, "Radius (R⊕)"),
        (SortField::StellarRadius, "Stellar (R☉)"),
        (SortField::Classification, "Classification"),
        (SortField::Confidence, "Confidence"),
    ]
    .iter()
    .map(|(field, label)| {
        let (dir, arrow) = if active.field == *field {
            let arrow = match active.direction {
                SortDirection::Ascending  => " ↑",
                SortDirection::Descending => " ↓",
            };
            (active.direction.toggled(), arrow)
        } else {
            (SortDirection::Ascending, "")
        };
        format!(
            r#"<th><a href="/data?sort={key}&dir={dir}">{label}{arrow}</a></th>"#,
            key = field.as_str(),
            dir = dir.as_str(),
        )
    })
    .collect();

    let rows: String = window
        .items
        .iter()
        .map(|record| {
            format!(
                r#"<tr>
    <td class="record-name">{name}</td>
    <td>{period:.1}</td>
    <td>{duration:.1}</td>
    <td>{radius:.2}</td>
    <td>{stellar:.2}</td>
    <td>{badge}</td>
    <td>{confidence}</td>
</tr>"#,
                name = escape(&record.name),
                period = record.orbital_period,
                duration = record.transit_duration,
                radius = record.planetary_radius,
                stellar = record.stellar_radius,
                badge = classification_badge(record.classification),
                confidence = confidence_cell(record.confidence),
            )
        })
        .collect();

    let prev = if page > 1 {
        format!(r#"<a href="/data?page={}" class="btn btn-outline btn-sm">&lsaquo; Prev</a>"#, page - 1)
    } else {
        r#"<span class="btn btn-outline btn-sm disabled">&lsaquo; Prev</span>"#.to_string()
    };
    let next = if page < window.total_pages {
        format!(r#"<a href="/data?page={}" class="btn btn-outline btn-sm">Next &rsaquo;</a>"#, page + 1)
    } else {
        r#"<span class="btn btn-outline btn-sm disabled">Next &rsaquo;</span>"#.to_string()
    };

    format!(
        r#"<div class="table-container">
    <table class="table">
        <thead><tr>{header}</tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>
<div class="pagination">
    <span class="text-muted">Showing {from} to {to} of {total} records</span>
    <div class="pagination-controls">
        {prev}
        <span>Page {page} of {pages}</span>
        {next}
    </div>
</div>"#,
        header = header,
        rows = rows,
        from = window.start_index + 1,
        to = window.end_index,
        total = window.total_items,
        prev = prev,
        page = page,
        pages = window.total_pages,
        next = next,
    )
}

fn render_datasets(datasets: &QueryState<Vec<DatasetSummary>>) -> String {
    let datasets = match datasets {
        QueryState::Ready(datasets) => datasets,
        QueryState::Pending         => return loading_placeholder("datasets"),
        QueryState::Failed(_)       => return error_placeholder("datasets"),
    };
    if datasets.is_empty() {
        return empty_placeholder("datasets", "Upload data to see datasets");
    }

    let rows: String = datasets
        .iter()
        .map(|dataset| {
            let size = if dataset.size_mb > 0.0 {
                format!("{:.1} MB", dataset.size_mb)
            } else {
                "—".to_string()
            };
            let uploaded = dataset
                .upload_date
                .map(|d| d.format("%b %e, %Y").to_string())
                .unwrap_or_else(|| "—".to_string());
            format!(
                r#"<tr>
    <td class="record-name">{name}</td>
    <td><span class="badge badge-format">{format}</span></td>
    <td>{size}</td>
    <td>{records}</td>
    <td>{uploaded}</td>
</tr>"#,
                name = escape(&dataset.name),
                format = escape(&dataset.format.to_uppercase()),
                size = size,
                records = dataset.records,
                uploaded = uploaded,
            )
        })
        .collect();

    format!(
        r#"<div class="table-container">
    <table class="table">
        <thead><tr><th>Name</th><th>Format</th><th>Size</th><th>Records</th><th>Uploaded</th></tr></thead>
        <tbody>{rows}</tbody>
    </table>
</div>"#
    )
}

// ── Mutations ─────────────────────────────────────────────────────────────────

pub async fn upload(State(state): State<SharedState>, mut multipart: Multipart) -> Redirect {
    let mut uploaded = None;
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) if field.name() == Some("file") => {
                let filename = field
                    .file_name()
                    .map(str::to_string)
                    .unwrap_or_else(|| "dataset.csv".to_string());
                match field.bytes().await {
                    Ok(bytes) => uploaded = Some((filename, bytes.to_vec())),
                    Err(err) => {
                        warn!(%err, "failed to read upload body");
                        break;
                    }
                }
            }
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(err) => {
                warn!(%err, "malformed multipart upload");
                break;
            }
        }
    }

    let Some((filename, bytes)) = uploaded else {
        state
            .push_notification(NoticeLevel::Warning, "Upload failed: no file received")
            .await;
        return Redirect::to("/data");
    };

    match state.api.upload_dataset(&filename, bytes).await {
        Ok(receipt) => {
            state
                .push_notification(
                    NoticeLevel::Success,
                    format!("Uploaded {} ({} records)", receipt.filename, receipt.records),
                )
                .await;
            // The backend classified the new rows; pull them into the cache.
            std::sync::Arc::clone(&state).spawn_catalog_refresh();
        }
        Err(err) => {
            warn!(%err, "dataset upload failed");
            state
                .push_notification(NoticeLevel::Warning, format!("Upload failed: {err}"))
                .await;
        }
    }
    Redirect::to("/data")
}

pub async fn refresh(State(state): State<SharedState>) -> Redirect {
    state.spawn_catalog_refresh();
    Redirect::to("/")
}
