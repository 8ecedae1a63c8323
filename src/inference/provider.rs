use super::{http::HttpInferenceProvider, types::Prediction};
use crate::{Result, config::InferenceConfig};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// Answers a question using only the supplied context.
///
/// Implementations are shared by every in-flight request, so they must be
/// safe to call concurrently. A backend that is not can be wrapped in
/// [`SerializedProvider`].
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    async fn answer(&self, question: &str, context: &str) -> Result<Prediction>;
}

/// Runs at most one call against the inner provider at a time.
pub struct SerializedProvider<P> {
    inner: P,
    slot: Mutex<()>,
}

impl<P> SerializedProvider<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            slot: Mutex::new(()),
        }
    }
}

#[async_trait]
impl<P: InferenceProvider> InferenceProvider for SerializedProvider<P> {
    async fn answer(&self, question: &str, context: &str) -> Result<Prediction> {
        let _guard = self.slot.lock().await;
        debug!("Acquired inference slot");
        self.inner.answer(question, context).await
    }
}

/// Constructs the process-wide provider described by `config`.
pub fn build_provider(config: &InferenceConfig) -> Result<Arc<dyn InferenceProvider>> {
    let http = HttpInferenceProvider::new(config.clone())?;

    if config.serialize_calls {
        info!("Inference calls will be serialized");
        Ok(Arc::new(SerializedProvider::new(http)))
    } else {
        Ok(Arc::new(http))
    }
}
