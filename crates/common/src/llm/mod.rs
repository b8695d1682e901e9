//! LLM chat client abstraction
//!
//! Provides a unified interface for the chat model behind TRIZ analysis:
//! - OpenAI-style chat completions endpoints
//! - A deterministic mock model for tests and offline operation

use crate::config::LlmConfig;
use crate::errors::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Trait for chat completion
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Run a single-prompt completion and return the reply text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the model name
    fn model_name(&self) -> &str;
}

/// OpenAI-style chat completions client
pub struct OpenAiChat {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    base_url: String,
    timeout: Duration,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

impl OpenAiChat {
    /// Create a new chat client
    pub fn new(
        api_key: String,
        model: Option<String>,
        base_url: Option<String>,
        temperature: f32,
        timeout: Duration,
        max_retries: u32,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| crate::DEFAULT_CHAT_MODEL.to_string()),
            temperature,
            base_url: base_url.unwrap_or_else(|| "https://api.openai.com/v1".to_string()),
            timeout,
            max_retries,
        }
    }

    /// Make request with retry
    async fn request_with_retry(&self, prompt: &str) -> Result<String> {
        let mut last_error = None;

        for attempt in 0..self.max_retries {
            if attempt > 0 {
                // Exponential backoff
                let delay = Duration::from_millis(100 * (2_u64.pow(attempt)));
                tokio::time::sleep(delay).await;
            }

            match self.make_request(prompt).await {
                Ok(reply) => return Ok(reply),
                Err(e) => {
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.max_retries,
                        error = %e,
                        "Chat request failed, retrying"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AppError::LlmError {
            message: "Unknown error after retries".to_string(),
        }))
    }

    async fn make_request(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/chat/completions", self.base_url);

        let request = ChatRequest {
            model: self.model.clone(),
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt.to_string(),
            }],
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::LlmTimeout {
                        timeout_ms: self.timeout.as_millis() as u64,
                    }
                } else {
                    AppError::LlmError {
                        message: format!("Request failed: {}", e),
                    }
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LlmError {
                message: format!("API error {}: {}", status, body),
            });
        }

        let result: ChatResponse = response.json().await.map_err(|e| AppError::LlmError {
            message: format!("Failed to parse response: {}", e),
        })?;

        result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| AppError::LlmError {
                message: "Empty response".to_string(),
            })
    }
}

#[async_trait]
impl ChatModel for OpenAiChat {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.request_with_retry(prompt).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Mock chat model for testing. Replies with a fixed string regardless of
/// the prompt.
pub struct MockChat {
    reply: String,
}

impl MockChat {
    /// A mock returning one plausible contradiction extraction
    pub fn new() -> Self {
        Self {
            reply: r#"[
  {
    "contradiction": {
      "improving_parameter": "Speed",
      "worsening_parameter": "Force"
    },
    "suggested_principles": ["Dynamics", "Parameter changes"]
  }
]"#
            .to_string(),
        }
    }

    /// A mock returning the given reply
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl Default for MockChat {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatModel for MockChat {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock-chat"
    }
}

/// Create a chat model based on configuration
pub fn create_chat_model(config: &LlmConfig) -> Arc<dyn ChatModel> {
    match config.provider.as_str() {
        "openai" => {
            let key = config.api_key.clone().unwrap_or_default();
            if key.is_empty() {
                tracing::warn!("No LLM API key configured, using mock chat model");
                return Arc::new(MockChat::new());
            }
            Arc::new(OpenAiChat::new(
                key,
                Some(config.model.clone()),
                config.api_base.clone(),
                config.temperature,
                Duration::from_secs(config.timeout_secs),
                config.max_retries,
            ))
        }
        "mock" => Arc::new(MockChat::new()),
        other => {
            tracing::warn!(provider = other, "Unknown chat provider, using mock");
            Arc::new(MockChat::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_chat() {
        let chat = MockChat::new();
        let reply = chat.complete("analyze this").await.unwrap();
        assert!(reply.contains("suggested_principles"));
        assert_eq!(chat.model_name(), "mock-chat");
    }

    #[tokio::test]
    async fn test_mock_chat_custom_reply() {
        let chat = MockChat::with_reply("[]");
        assert_eq!(chat.complete("").await.unwrap(), "[]");
    }

    #[test]
    fn test_factory_falls_back_to_mock() {
        let config = LlmConfig {
            provider: "openai".into(),
            api_key: None,
            ..Default::default()
        };
        let chat = create_chat_model(&config);
        assert_eq!(chat.model_name(), "mock-chat");

        let config = LlmConfig {
            provider: "something-else".into(),
            ..Default::default()
        };
        let chat = create_chat_model(&config);
        assert_eq!(chat.model_name(), "mock-chat");
    }
}
