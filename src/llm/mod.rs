mod client;
mod huggingface;
mod types;

pub use client::{LlmClient, OpenAiClient};
pub use huggingface::{HuggingFaceClient, render_prompt};
pub use types::*;

use crate::config::{LlmConfig, Provider};
use std::sync::Arc;
use tracing::info;

/// Builds the inference client selected by `config.provider`.
pub fn create_llm_client(config: &LlmConfig) -> Arc<dyn LlmClient> {
    info!(
        "Using {:?} inference backend at {} with model {}",
        config.provider,
        config.base_url(),
        config.model()
    );

    match config.provider {
        Provider::Groq => Arc::new(OpenAiClient::new(config)),
        Provider::HuggingFace => Arc::new(HuggingFaceClient::new(config)),
    }
}
