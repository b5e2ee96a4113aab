use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::{
    chat::ports::LlmClient,
    common::{entities::app_errors::CoreError, LlmConfig},
};

/// OpenAI-compatible chat completions client. Every request asks for a
/// JSON-object-shaped completion; the caller decides how strictly to parse
/// it. When no API key is configured, calls fail fast with
/// [`CoreError::LlmNotConfigured`] and never touch the network.
#[derive(Debug, Clone)]
pub struct OpenAiLlmClient {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: MessageResponse,
}

#[derive(Debug, Deserialize)]
struct MessageResponse {
    content: String,
}

impl OpenAiLlmClient {
    pub fn new(config: LlmConfig) -> Self {
        Self {
            api_key: config.api_key.filter(|key| !key.is_empty()),
            model: config.model,
            base_url: config.base_url,
            client: Client::new(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

impl LlmClient for OpenAiLlmClient {
    async fn chat_completion(
        &self,
        system_prompt: String,
        user_message: String,
    ) -> Result<String, CoreError> {
        let api_key = self.api_key.as_ref().ok_or(CoreError::LlmNotConfigured)?;
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: &system_prompt,
                },
                Message {
                    role: "user",
                    content: &user_message,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("OpenAI API request failed: {}", e);
                CoreError::ExternalServiceError(format!("LLM API error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("OpenAI API error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "LLM API returned error: {} - {}",
                status, error_text
            )));
        }

        let completion: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse OpenAI response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse LLM response: {}", e))
        })?;

        completion
            .choices
            .first()
            .map(|choice| choice.message.content.clone())
            .ok_or_else(|| CoreError::ExternalServiceError("No response from LLM".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>) -> LlmConfig {
        LlmConfig {
            api_key: api_key.map(str::to_string),
            model: "gpt-3.5-turbo".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    #[tokio::test]
    async fn missing_key_fails_fast_without_network_io() {
        let client = OpenAiLlmClient::new(config(None));

        assert!(!client.is_configured());
        let err = client
            .chat_completion("system".to_string(), "user".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::LlmNotConfigured);
    }

    #[tokio::test]
    async fn empty_key_counts_as_not_configured() {
        let client = OpenAiLlmClient::new(config(Some("")));

        assert!(!client.is_configured());
        let err = client
            .chat_completion("system".to_string(), "user".to_string())
            .await
            .unwrap_err();
        assert_eq!(err, CoreError::LlmNotConfigured);
    }
}
