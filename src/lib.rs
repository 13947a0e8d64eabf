// Library exports for the binary and tests
pub mod config;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use axum::{routing::get, Router};

use config::Config;
use services::sheets::SheetStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SheetStore>,
    pub config: Arc<Config>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route(
            "/api/avisos",
            get(routes::avisos::list_avisos).post(routes::avisos::create_aviso),
        )
        .route(
            "/api/louvores",
            get(routes::louvores::list_louvores).post(routes::louvores::create_louvor),
        )
        .route(
            "/api/oracoes",
            get(routes::oracoes::list_oracoes).post(routes::oracoes::create_oracao),
        )
        .route(
            "/api/visitantes",
            get(routes::visitantes::list_visitantes).post(routes::visitantes::create_visitante),
        )
        .with_state(state)
}
