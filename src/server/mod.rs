mod error;
pub mod handlers;
pub mod lifecycle;
mod types;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE};
pub use handlers::AppState;
pub use types::{AnswerRequest, AnswerResult, ErrorResponse, round_confidence};

use crate::{Result, config::Config, inference::build_provider};
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use std::{any::Any, net::SocketAddr};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

/// Largest request body `POST /answer` will buffer, unless configured otherwise.
pub const DEFAULT_MAX_BODY_BYTES: usize = 16 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    router_with_body_limit(state, DEFAULT_MAX_BODY_BYTES)
}

pub fn router_with_body_limit(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/answer", post(handlers::answer))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

/// Last line of defence: a panic anywhere below the router becomes the same
/// opaque 500 as any other internal failure.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    error!("Handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: INTERNAL_ERROR_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

pub async fn run(config: Config) -> Result<()> {
    // Initialize the shared inference provider once for the whole process
    let provider = build_provider(&config.inference)?;
    info!(
        "Using model {} at {}",
        config.inference.model, config.inference.base_url
    );

    let app = router_with_body_limit(AppState::new(provider), config.server.max_body_bytes);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
