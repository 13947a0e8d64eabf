use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use adjm_api::config::Config;
use adjm_api::services::sheets::SheetsClient;
use adjm_api::{app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;
    let config = Arc::new(config);

    // A bad spreadsheet id or credential fails here, at startup, instead of
    // turning every request into a 500.
    let sheets = SheetsClient::connect(&config).await.map_err(|e| {
        tracing::error!("Failed to initialize Sheets client: {e}");
        e
    })?;
    info!("Sheets client authenticated for spreadsheet {}", config.sheets_id);

    let state = AppState {
        store: Arc::new(sheets),
        config: config.clone(),
    };

    let cors_origin = if config.allowed_origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(
            config
                .allowed_origins
                .iter()
                .filter_map(|o| o.parse::<HeaderValue>().ok()),
        )
    };
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
        .allow_origin(cors_origin);

    let router = app(state).layer(TraceLayer::new_for_http()).layer(cors);

    let addr = format!("{}:{}", config.host, config.port);
    info!("AD Jardim Marcia API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
