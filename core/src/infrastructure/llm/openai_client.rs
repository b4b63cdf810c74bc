use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::domain::{
    common::entities::app_errors::CoreError,
    crop_doctor::ports::{ChatClient, ChatMessage},
};

const TEMPERATURE: f32 = 0.7;
const MAX_TOKENS: u32 = 1000;

/// OpenAI-compatible chat completions client.
#[derive(Debug, Clone)]
pub struct OpenAIChatClient {
    api_key: String,
    base_url: String,
    model_name: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAIChatClient {
    pub fn new(api_key: String, base_url: String, model_name: String) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            model_name,
            client: Client::new(),
        }
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

impl ChatClient for OpenAIChatClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, CoreError> {
        let request = ChatCompletionRequest {
            model: &self.model_name,
            messages: &messages,
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Chat API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED => {
                tracing::error!("Chat API rejected the API key");
                return Err(CoreError::InvalidApiKey);
            }
            StatusCode::TOO_MANY_REQUESTS => {
                tracing::warn!("Chat API rate limit reached");
                return Err(CoreError::RateLimited);
            }
            status if !status.is_success() => {
                let error_text = response.text().await.unwrap_or_default();
                tracing::error!("Chat API error: {} - {}", status, error_text);
                return Err(CoreError::ExternalServiceError(format!(
                    "LLM API returned error: {} - {}",
                    status, error_text
                )));
            }
            _ => {}
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse chat API response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}
