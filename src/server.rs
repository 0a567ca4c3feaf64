use crate::observability;
use crate::orchestrator::Orchestrator;
use crate::types::AggregateResult;
use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
    routing::get,
    Extension, Router,
};
use hyper::Server;
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "roster-mapper",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Runs one resolution pass per request. Always answers 200; failures travel in `errors`.
async fn roster(Extension(orchestrator): Extension<Orchestrator>) -> Json<AggregateResult> {
    Json(orchestrator.run().await)
}

async fn metrics() -> impl IntoResponse {
    match observability::render() {
        Some(body) => (StatusCode::OK, body),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed".to_string(),
        ),
    }
}

/// Create the HTTP router
pub fn create_server(orchestrator: Orchestrator) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    Router::new()
        .route("/", get(roster))
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .layer(Extension(orchestrator))
        .layer(ServiceBuilder::new().layer(cors))
}

/// Start the HTTP server on the specified port
pub async fn start_server(orchestrator: Orchestrator, port: u16) -> anyhow::Result<()> {
    let app = create_server(orchestrator);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("HTTP server running on http://localhost:{port}");
    Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
