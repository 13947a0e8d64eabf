use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    models::visitante::{self, Visitante},
    routes::{ok, read_error, write_error, ApiError},
    services::rows,
    AppState,
};

/// GET /api/visitantes
pub async fn list_visitantes(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state
        .store
        .get_rows(visitante::TAB)
        .await
        .map_err(|e| read_error("/api/visitantes", e))?;

    let items: Vec<Visitante> = records
        .iter()
        .map(Visitante::from_record)
        .filter(|v| !v.is_blank())
        .collect();

    Ok(ok(items))
}

/// POST /api/visitantes — all fields optional.
pub async fn create_visitante(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let body = rows::normalize_payload(&payload);
    let mut item = Visitante::from_record(&body);
    if item.status.is_empty() {
        item.status = visitante::DEFAULT_STATUS.into();
    }

    let existing = state
        .store
        .get_rows(visitante::TAB)
        .await
        .map_err(|e| write_error("/api/visitantes", e))?;
    item.id = rows::next_id(&existing);
    item.timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

    state
        .store
        .append_row(visitante::TAB, item.to_row())
        .await
        .map_err(|e| write_error("/api/visitantes", e))?;

    Ok(ok(item))
}
