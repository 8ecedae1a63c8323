use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Raw output of a question-answering model: the extracted span and the
/// model's confidence in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub answer: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<usize>,
}

impl Prediction {
    pub fn new(answer: impl Into<String>, score: f64) -> Self {
        Self {
            answer: answer.into(),
            score,
            start: None,
            end: None,
        }
    }

    /// Rejects scores a well-behaved model never produces.
    pub fn validate(&self) -> Result<()> {
        if !self.score.is_finite() || !(0.0..=1.0).contains(&self.score) {
            return Err(Error::inference(format!(
                "Score out of range: {}",
                self.score
            )));
        }
        Ok(())
    }
}

/// Body sent to a Hugging Face style question-answering endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnsweringRequest<'a> {
    pub inputs: QuestionAnsweringInputs<'a>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnsweringInputs<'a> {
    pub question: &'a str,
    pub context: &'a str,
}

/// Some deployments answer with a single object, others with a top-k list.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum QuestionAnsweringResponse {
    Single(Prediction),
    Ranked(Vec<Prediction>),
}

impl QuestionAnsweringResponse {
    pub fn into_best(self) -> Result<Prediction> {
        match self {
            Self::Single(prediction) => Ok(prediction),
            Self::Ranked(predictions) => predictions
                .into_iter()
                .next()
                .ok_or_else(|| Error::inference("Empty prediction list")),
        }
    }
}
