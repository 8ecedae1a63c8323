use super::types::ErrorResponse;
use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Everything the answer endpoint can fail with. Only the validation
/// variants carry a caller-visible message; the rest render the same
/// generic 500 body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid JSON format")]
    InvalidPayload,

    #[error("Missing {0}")]
    MissingField(&'static str),

    #[error("Payload too large")]
    PayloadTooLarge,

    #[error("Inference failed: {0}")]
    InferenceFailure(#[source] crate::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload | Self::MissingField(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            Self::InferenceFailure(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message sent to the caller.
    pub fn message(&self) -> String {
        match self {
            Self::InvalidPayload | Self::MissingField(_) | Self::PayloadTooLarge => {
                self.to_string()
            }
            Self::InferenceFailure(_) | Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Only an exceeded body limit gets its own variant; a body that could not
/// be read for any other reason is treated like an unparseable one.
impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            Self::PayloadTooLarge
        } else {
            Self::InvalidPayload
        }
    }
}

impl From<crate::Error> for ApiError {
    fn from(err: crate::Error) -> Self {
        match err {
            crate::Error::Inference(_) | crate::Error::Network(_) => Self::InferenceFailure(err),
            other => Self::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status_code(),
            Json(ErrorResponse {
                error: self.message(),
            }),
        )
            .into_response()
    }
}
