use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::{
    models::aviso::{self, Aviso},
    routes::{fail, ok, read_error, write_error, ApiError},
    services::rows,
    AppState,
};

/// GET /api/avisos — all announcements, newest first.
pub async fn list_avisos(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let records = state
        .store
        .get_rows(aviso::TAB)
        .await
        .map_err(|e| read_error("/api/avisos", e))?;

    let mut items: Vec<Aviso> = records
        .iter()
        .map(Aviso::from_record)
        .filter(|a| !a.is_blank())
        .collect();
    items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    Ok(ok(items))
}

/// POST /api/avisos — titulo and mensagem are required.
pub async fn create_aviso(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let body = rows::normalize_payload(&payload);
    let mut item = Aviso::from_record(&body);

    if item.titulo.trim().is_empty() || item.mensagem.trim().is_empty() {
        return Err(fail(
            StatusCode::BAD_REQUEST,
            "Campos obrigatórios: titulo, mensagem",
        ));
    }
    if item.prioridade.is_empty() {
        item.prioridade = aviso::DEFAULT_PRIORIDADE.into();
    }
    if item.status.is_empty() {
        item.status = aviso::DEFAULT_STATUS.into();
    }

    let existing = state
        .store
        .get_rows(aviso::TAB)
        .await
        .map_err(|e| write_error("/api/avisos", e))?;
    item.id = rows::next_id(&existing);
    item.timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false);

    state
        .store
        .append_row(aviso::TAB, item.to_row())
        .await
        .map_err(|e| write_error("/api/avisos", e))?;

    Ok(ok(item))
}
