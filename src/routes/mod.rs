pub mod avisos;
pub mod health;
pub mod louvores;
pub mod oracoes;
pub mod visitantes;

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{json, Value};

use crate::services::sheets::SheetsError;

pub type ApiError = (StatusCode, Json<Value>);

pub fn ok(data: impl Serialize) -> Json<Value> {
    Json(json!({ "success": true, "data": data }))
}

pub fn fail(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "success": false, "error": message.into() })))
}

/// Store failure while listing: generic localized 500.
pub fn read_error(route: &str, err: SheetsError) -> ApiError {
    tracing::error!("GET {route} failed: {err}");
    fail(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao acessar planilha")
}

/// Store failure while creating: surface the store's own message as a 400
/// when Google rejected the request, otherwise the generic 500.
pub fn write_error(route: &str, err: SheetsError) -> ApiError {
    tracing::error!("POST {route} failed: {err}");
    match err {
        SheetsError::Api { status, message } if (400..500).contains(&status) => {
            fail(StatusCode::BAD_REQUEST, message)
        }
        _ => fail(StatusCode::INTERNAL_SERVER_ERROR, "Erro ao acessar planilha"),
    }
}
