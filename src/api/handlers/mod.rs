use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::archive::Archive;
use crate::models::{Person, PersonId, SortDirection};
use crate::views::{
    build_detail, build_table, build_timeline, build_tree, PersonDetail, SortColumn, TableRow,
    TimelineEntry, TreeViewModel,
};

// ============================================================
// Health
// ============================================================

pub async fn health(State(archive): State<Arc<Archive>>) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok", "people": archive.len() }))
}

// ============================================================
// People
// ============================================================

pub async fn list_people(State(archive): State<Arc<Archive>>) -> Json<Vec<Person>> {
    Json(archive.all().to_vec())
}

pub async fn get_person(
    State(archive): State<Arc<Archive>>,
    Path(id): Path<PersonId>,
) -> Result<Json<PersonDetail>, (StatusCode, String)> {
    build_detail(&archive, id)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, "Person not found".to_string()))
}

// ============================================================
// View-models
// ============================================================

#[derive(Debug, Deserialize)]
pub struct TableQuery {
    sort: Option<String>,
    dir: Option<String>,
}

pub async fn table_view(
    State(archive): State<Arc<Archive>>,
    Query(query): Query<TableQuery>,
) -> Result<Json<Vec<TableRow>>, (StatusCode, String)> {
    let column = match &query.sort {
        Some(raw) => SortColumn::from_str(raw).ok_or_else(|| {
            tracing::warn!("Rejected table sort column: {}", raw);
            (StatusCode::BAD_REQUEST, format!("Unknown sort column: {}", raw))
        })?,
        None => SortColumn::FirstName,
    };
    let direction = match &query.dir {
        Some(raw) => SortDirection::from_str(raw).ok_or_else(|| {
            tracing::warn!("Rejected table sort direction: {}", raw);
            (
                StatusCode::BAD_REQUEST,
                format!("Unknown sort direction: {}", raw),
            )
        })?,
        None => SortDirection::Ascending,
    };

    Ok(Json(build_table(&archive, column, direction)))
}

pub async fn tree_view(State(archive): State<Arc<Archive>>) -> Json<TreeViewModel> {
    Json(build_tree(&archive))
}

pub async fn timeline_view(State(archive): State<Arc<Archive>>) -> Json<Vec<TimelineEntry>> {
    Json(build_timeline(&archive))
}
