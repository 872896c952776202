use crate::config::ServerConfig;
use crate::server::{routes, static_files};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Uploads larger than this are rejected before preprocessing
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Build the Axum application
pub fn build_app(config: ServerConfig) -> Router {
    build_app_with_state(AppState::new(config))
}

/// Build the Axum application over an existing state
pub fn build_app_with_state(state: AppState) -> Router {
    // The page and the API are served from the same origin; permissive CORS
    // only matters when the page is opened from a dev server.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/health", get(routes::health))
        .route("/labels", get(routes::labels))
        .route("/model", get(routes::model_status))
        .route("/predict", post(routes::predict));

    Router::new()
        .nest("/api", api_routes)
        .route("/", get(static_files::index))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the server
pub async fn run_server(config: ServerConfig, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_app(config);

    tracing::info!("Starting Signscope server on {}", addr);
    tracing::info!("Open http://{} in your browser", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
