//! HTTP boundary.
//!
//! Thin plumbing over the pipeline: routing, request extraction, the
//! process-time header, CORS, and startup/shutdown. All decisions live
//! in [`crate::pipeline`].

use crate::classifier::SentimentClassifier;
use crate::config::ServiceConfig;
use crate::error::ApiError;
use crate::pipeline::Pipeline;
use crate::types::Prediction;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
}

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    model_loaded: bool,
}

/// Build the service router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
        .layer(middleware::from_fn(process_time_header))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn predict_handler(
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    Json(request): Json<PredictRequest>,
) -> Result<Json<Prediction>, ApiError> {
    let client_id = addr.ip().to_string();
    let prediction = state.pipeline.predict(&client_id, &request.text).await?;
    Ok(Json(prediction))
}

async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        model_loaded: state.pipeline.model_loaded(),
    })
}

/// Stamp every response with wall-clock processing time in seconds.
async fn process_time_header(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let mut response = next.run(request).await;
    let elapsed = start.elapsed().as_secs_f64();
    if let Ok(value) = HeaderValue::from_str(&elapsed.to_string()) {
        response.headers_mut().insert("x-process-time", value);
    }
    response
}

/// Run the service until interrupted.
pub async fn serve(
    config: ServiceConfig,
    classifier: Arc<dyn SentimentClassifier>,
) -> std::io::Result<()> {
    let pipeline = Arc::new(Pipeline::new(&config, classifier));

    // Periodic sweep keeps the per-client limiter map bounded.
    let sweeper = Arc::clone(&pipeline);
    let sweep_interval = config.rate_window;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweep_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweeper.sweep();
        }
    });

    let app = router(AppState { pipeline });
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!(addr = %config.bind_addr, "listening");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => tracing::error!(error = %e, "failed to install SIGTERM handler"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
