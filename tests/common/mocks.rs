use answer_service::{
    Error, Result,
    inference::{InferenceProvider, Prediction},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// What the mock provider does when called.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return this prediction.
    Fixed(Prediction),
    /// Answer with the question itself, so responses can be matched to requests.
    Echo,
    /// Fail with an inference error carrying this message.
    Fail(String),
    /// Panic inside the call.
    Panic(String),
}

/// Mock inference provider for testing
#[derive(Debug)]
pub struct MockInferenceProvider {
    pub behavior: MockBehavior,
    pub requests: Arc<Mutex<Vec<(String, String)>>>,
    pub delay: Option<Duration>,
}

impl MockInferenceProvider {
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            requests: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn answering(answer: &str, score: f64) -> Self {
        Self::new(MockBehavior::Fixed(Prediction::new(answer, score)))
    }

    pub fn echo() -> Self {
        Self::new(MockBehavior::Echo)
    }

    pub fn failing(message: &str) -> Self {
        Self::new(MockBehavior::Fail(message.to_string()))
    }

    pub fn panicking(message: &str) -> Self {
        Self::new(MockBehavior::Panic(message.to_string()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn get_requests(&self) -> Vec<(String, String)> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl InferenceProvider for MockInferenceProvider {
    async fn answer(&self, question: &str, context: &str) -> Result<Prediction> {
        self.requests
            .lock()
            .unwrap()
            .push((question.to_string(), context.to_string()));

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.behavior {
            MockBehavior::Fixed(prediction) => Ok(prediction.clone()),
            MockBehavior::Echo => Ok(Prediction::new(question, 0.5)),
            MockBehavior::Fail(message) => Err(Error::inference(message.clone())),
            MockBehavior::Panic(message) => panic!("{}", message),
        }
    }
}
