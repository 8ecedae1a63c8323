mod http;
pub mod provider;
mod types;

pub use http::HttpInferenceProvider;
pub use provider::{InferenceProvider, SerializedProvider, build_provider};
pub use types::Prediction;
