use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::routes::ok;

pub async fn health_check() -> Json<Value> {
    ok(json!({
        "message": "AD Jardim Marcia Backend is running",
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Micros, false),
    }))
}
