use super::{
    provider::InferenceProvider,
    types::{Prediction, QuestionAnsweringInputs, QuestionAnsweringRequest, QuestionAnsweringResponse},
};
use crate::{Error, Result, config::InferenceConfig};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Calls a hosted question-answering model over HTTP.
///
/// `reqwest::Client` pools connections and is safe to share, so no extra
/// locking is needed around it.
pub struct HttpInferenceProvider {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpInferenceProvider {
    pub fn new(config: InferenceConfig) -> Result<Self> {
        let client = Client::builder().build()?;
        let endpoint = format!(
            "{}/models/{}",
            config.base_url.trim_end_matches('/'),
            config.model
        );

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.filter(|key| !key.is_empty()),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl InferenceProvider for HttpInferenceProvider {
    async fn answer(&self, question: &str, context: &str) -> Result<Prediction> {
        debug!(
            "Requesting answer from {} (question: {} chars, context: {} chars)",
            self.endpoint,
            question.len(),
            context.len()
        );

        let body = QuestionAnsweringRequest {
            inputs: QuestionAnsweringInputs { question, context },
        };

        let mut request = self.client.post(&self.endpoint).json(&body);
        if let Some(ref api_key) = self.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(Error::inference(format!(
                "Model endpoint returned {}: {}",
                status, detail
            )));
        }

        let bytes = response.bytes().await?;
        let decoded: QuestionAnsweringResponse = serde_json::from_slice(&bytes)
            .map_err(|e| Error::inference(format!("Malformed model response: {}", e)))?;

        let prediction = decoded.into_best()?;
        prediction.validate()?;

        debug!("Model answered with score {}", prediction.score);
        Ok(prediction)
    }
}
