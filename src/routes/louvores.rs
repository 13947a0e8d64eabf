use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    models::louvor::{self, Louvor},
    routes::{ok, read_error, write_error, ApiError},
    services::rows,
    AppState,
};

/// GET /api/louvores
pub async fn list_louvores(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state
        .store
        .get_rows(louvor::TAB)
        .await
        .map_err(|e| read_error("/api/louvores", e))?;

    let items: Vec<Louvor> = records
        .iter()
        .map(Louvor::from_record)
        .filter(|l| !l.is_blank())
        .collect();

    Ok(ok(items))
}

/// POST /api/louvores — all fields optional.
pub async fn create_louvor(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let body = rows::normalize_payload(&payload);
    let mut item = Louvor::from_record(&body);
    if item.status.is_empty() {
        item.status = louvor::DEFAULT_STATUS.into();
    }

    let existing = state
        .store
        .get_rows(louvor::TAB)
        .await
        .map_err(|e| write_error("/api/louvores", e))?;
    item.id = rows::next_id(&existing);
    item.timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

    state
        .store
        .append_row(louvor::TAB, item.to_row())
        .await
        .map_err(|e| write_error("/api/louvores", e))?;

    Ok(ok(item))
}
