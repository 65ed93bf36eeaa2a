use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::Router;
use log::{info, warn};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::analysis_result::ResultShape;
use crate::config::AppConfig;
use crate::handlers::{analyzers, health, AnalyzeHandler, UploadHandler};
use crate::llm::LlmGateway;

/// largest accepted request body (transcript JSON or upload)
pub const MAX_BODY_BYTES: usize = 5 * 1024 * 1024;

/// read-only state shared by all requests
pub struct AppState {
    pub gateway: Arc<dyn LlmGateway>,
    pub result_shape: ResultShape,
}

impl AppState {
    pub fn new(gateway: Arc<dyn LlmGateway>, result_shape: ResultShape) -> Self {
        Self {
            gateway,
            result_shape,
        }
    }
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/analyzers", get(analyzers::list_analyzers))
        .route("/analyze", post(AnalyzeHandler::handle))
        .route("/upload", post(UploadHandler::handle))
}

/// the full HTTP surface; analyzer routes answer both at the root and under `/api`
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .merge(api_routes())
        .nest("/api", api_routes())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// `*` allows any origin, otherwise a comma-separated list
pub fn cors_layer(allowed_origins: &str) -> CorsLayer {
    let allowed_origins = allowed_origins.trim();

    let allow_origin = if allowed_origins.is_empty() || allowed_origins == "*" {
        AllowOrigin::any()
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        if origins.is_empty() {
            AllowOrigin::any()
        } else {
            AllowOrigin::list(origins)
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

pub async fn serve(
    config: &AppConfig,
    gateway: Arc<dyn LlmGateway>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = Arc::new(AppState::new(gateway, config.result_shape));
    let app = build_router(state).layer(cors_layer(&config.server.cors_allowed_origins));

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!(
        "Listening on {} (result shape: {})",
        address,
        config.result_shape.name()
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
