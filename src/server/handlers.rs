use super::{
    error::ApiError,
    lifecycle::{RequestEvent, RequestLifecycle},
    types::{AnswerRequest, AnswerResult},
};
use crate::inference::InferenceProvider;
use axum::{
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::Json,
};
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span, warn};

#[derive(Clone)]
pub struct AppState {
    pub provider: Arc<dyn InferenceProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn InferenceProvider>) -> Self {
        Self { provider }
    }
}

pub async fn home() -> &'static str {
    "Hello, World!"
}

/// `POST /answer`. The body is taken as raw bytes, and the extractor's own
/// rejection is kept, so that oversized, malformed or non-object bodies all
/// get this endpoint's JSON error contract.
pub async fn answer(
    State(state): State<AppState>,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Json<AnswerResult>, ApiError> {
    let mut lifecycle = RequestLifecycle::new();
    let span = info_span!("answer", request_id = %lifecycle.id());

    async move {
        match process(&state, &mut lifecycle, body).await {
            Ok(result) => Ok(Json(result)),
            Err(e) => {
                if e.status_code().is_server_error() {
                    error!("Request failed: {}", e);
                } else {
                    info!("Rejected request: {}", e);
                }
                if let Err(transition_err) = lifecycle.transition(RequestEvent::Failed) {
                    warn!("Could not record failure: {}", transition_err);
                }
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

async fn process(
    state: &AppState,
    lifecycle: &mut RequestLifecycle,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<AnswerResult, ApiError> {
    let body = body?;
    let request = AnswerRequest::from_body(&body)?;
    lifecycle.transition(RequestEvent::PayloadAccepted)?;

    info!(
        "Answering question ({} chars) over context ({} chars)",
        request.question.len(),
        request.context.len()
    );

    let prediction = state
        .provider
        .answer(&request.question, &request.context)
        .await
        .map_err(ApiError::InferenceFailure)?;
    prediction.validate().map_err(ApiError::InferenceFailure)?;
    lifecycle.transition(RequestEvent::PredictionReturned)?;

    let result = AnswerResult::new(request.question, prediction);
    lifecycle.transition(RequestEvent::ResponseShaped)?;

    info!("Answered with confidence {}", result.confidence);
    Ok(result)
}
