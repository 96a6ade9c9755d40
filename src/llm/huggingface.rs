//! Hugging Face serverless inference provider.
//!
//! Text-generation models take a single prompt string, so chat messages are
//! flattened before sending. Only the first generated sequence is kept.

use super::client::LlmClient;
use super::types::*;
use crate::{Error, Result, config::LlmConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    repetition_penalty: Option<f32>,
    wait_for_model: bool,
}

impl HuggingFaceClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url().trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            model: config.model().to_string(),
            repetition_penalty: config.repetition_penalty,
            wait_for_model: config.wait_for_model,
        }
    }

    fn api_url(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }

    fn build_request(&self, request: &ChatCompletionRequest) -> GenerationRequest {
        GenerationRequest {
            inputs: render_prompt(&request.messages),
            parameters: GenerationParameters {
                max_new_tokens: request.max_tokens,
                temperature: request.temperature,
                repetition_penalty: self.repetition_penalty,
                return_full_text: false,
            },
            options: GenerationOptions {
                wait_for_model: self.wait_for_model,
            },
        }
    }
}

/// Joins message contents into one prompt, system instructions first.
pub fn render_prompt(messages: &[ChatMessage]) -> String {
    messages
        .iter()
        .map(|msg| msg.content.trim())
        .filter(|content| !content.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl LlmClient for HuggingFaceClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let body = self.build_request(&request);

        debug!(
            model = %self.model,
            prompt_len = body.inputs.len(),
            "Sending request to Hugging Face inference API"
        );

        let response = self
            .client
            .post(self.api_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Error::llm(format!(
                "Hugging Face API error {}: {}",
                status, text
            )));
        }

        let generations: Vec<Generation> = serde_json::from_str(&text)?;

        debug!(
            "Received {} generations from Hugging Face",
            generations.len()
        );

        let choices = generations
            .into_iter()
            .take(1)
            .map(|generation| Choice {
                message: ChatMessage::assistant(generation.generated_text),
            })
            .collect();

        Ok(ChatCompletionResponse { choices })
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest {
    inputs: String,
    parameters: GenerationParameters,
    options: GenerationOptions,
}

#[derive(Debug, Serialize)]
struct GenerationParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    max_new_tokens: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    repetition_penalty: Option<f32>,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct GenerationOptions {
    wait_for_model: bool,
}

#[derive(Debug, Deserialize)]
struct Generation {
    #[serde(default)]
    generated_text: String,
}
