mod extractors;
mod scan;

use axum::{extract::State, routing::get, Json, Router};
use slant_analysis::{OllamaAnalyzer, OllamaClient, ResultCache, ScanService};
use slant_common::types::ServiceInfo;
use slant_config::{init_tracing, AppConfig, OllamaConfig};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::{ServeDir, ServeFile};

#[derive(Clone)]
pub struct AppState {
    pub scanner: Arc<ScanService>,
    pub info: Arc<ServiceInfo>,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(state.info.as_ref().clone())
}

fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .merge(scan::router())
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env().expect("failed to load config");
    init_tracing(&config.log_level);

    let ollama = OllamaConfig::from_env().expect("failed to load backend config");
    tracing::info!(
        service = "slant-api",
        backend = %ollama.url,
        model = %ollama.model,
        "starting"
    );

    let info = ServiceInfo::new("slant-api", &ollama.model);
    let client = OllamaClient::new(ollama).expect("failed to build backend client");
    let scanner = ScanService::new(
        Arc::new(OllamaAnalyzer::new(client)),
        ResultCache::in_memory(),
    );
    let state = AppState {
        scanner: Arc::new(scanner),
        info: Arc::new(info),
    };

    let app = build_router(state, &config.static_dir);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
