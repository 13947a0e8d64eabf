use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    models::oracao::{self, Oracao},
    routes::{ok, read_error, write_error, ApiError},
    services::rows,
    AppState,
};

/// GET /api/oracoes
pub async fn list_oracoes(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state
        .store
        .get_rows(oracao::TAB)
        .await
        .map_err(|e| read_error("/api/oracoes", e))?;

    let items: Vec<Oracao> = records
        .iter()
        .map(Oracao::from_record)
        .filter(|o| !o.is_blank())
        .collect();

    Ok(ok(items))
}

/// POST /api/oracoes — all fields optional.
pub async fn create_oracao(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let body = rows::normalize_payload(&payload);
    let mut item = Oracao::from_record(&body);
    if item.status.is_empty() {
        item.status = oracao::DEFAULT_STATUS.into();
    }

    let existing = state
        .store
        .get_rows(oracao::TAB)
        .await
        .map_err(|e| write_error("/api/oracoes", e))?;
    item.id = rows::next_id(&existing);
    item.timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

    state
        .store
        .append_row(oracao::TAB, item.to_row())
        .await
        .map_err(|e| write_error("/api/oracoes", e))?;

    Ok(ok(item))
}
