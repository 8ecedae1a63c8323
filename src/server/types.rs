use super::error::ApiError;
use crate::inference::Prediction;
use serde::Serialize;
use serde_json::{Map, Value};

/// Number of decimal places kept in the reported confidence.
pub const CONFIDENCE_DECIMALS: i32 = 4;

/// A payload that has passed validation: both fields are present,
/// string-valued and contain something other than whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRequest {
    pub question: String,
    pub context: String,
}

impl AnswerRequest {
    /// Parses and validates a raw request body. `question` is checked before
    /// `context`, so a body missing both reports the question.
    pub fn from_body(body: &[u8]) -> Result<Self, ApiError> {
        let payload = match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(map)) => map,
            _ => return Err(ApiError::InvalidPayload),
        };

        let question = required_field(&payload, "question")?;
        let context = required_field(&payload, "context")?;

        Ok(Self { question, context })
    }
}

fn required_field(payload: &Map<String, Value>, field: &'static str) -> Result<String, ApiError> {
    match payload.get(field) {
        Some(Value::String(value)) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(ApiError::MissingField(field)),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerResult {
    pub question: String,
    pub answer: String,
    pub confidence: f64,
}

impl AnswerResult {
    pub fn new(question: String, prediction: Prediction) -> Self {
        Self {
            question,
            answer: prediction.answer,
            confidence: round_confidence(prediction.score),
        }
    }
}

/// Rounds half away from zero to [`CONFIDENCE_DECIMALS`] places.
pub fn round_confidence(score: f64) -> f64 {
    let factor = 10f64.powi(CONFIDENCE_DECIMALS);
    (score * factor).round() / factor
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
