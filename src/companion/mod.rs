mod extract;
pub mod prompts;

pub use extract::{CorgiName, FALLBACK_NAME, FALLBACK_STORY, extract_name};
pub use prompts::Prompt;

use crate::{Error, Result, llm::LlmClient};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs the two corgi operations against an injected inference client.
pub struct Companion {
    llm_client: Arc<dyn LlmClient>,
}

impl Companion {
    pub fn new(llm_client: Arc<dyn LlmClient>) -> Self {
        Self { llm_client }
    }

    /// Asks the model for a name and origin story. Extraction misses fall back
    /// to fixed text and are not errors.
    pub async fn generate_name(&self) -> Result<CorgiName> {
        let text = self.complete(prompts::name_generation()).await?;
        let result = extract_name(&text);

        info!("Generated corgi name: {}", result.name);
        Ok(result)
    }

    /// Returns the model's interpretation of `behavior` unmodified.
    ///
    /// An empty behavior is rejected before any backend call is made.
    pub async fn interpret_behavior(&self, behavior: &str) -> Result<String> {
        if behavior.is_empty() {
            return Err(Error::validation("behavior is empty"));
        }

        self.complete(prompts::behavior_interpretation(behavior))
            .await
    }

    async fn complete(&self, prompt: Prompt) -> Result<String> {
        let response = self
            .llm_client
            .create_chat_completion(prompt.into_request())
            .await?;

        let text = response.first_content();
        debug!("Model returned {} bytes of text", text.len());

        Ok(text)
    }
}
