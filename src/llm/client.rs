use anyhow::{Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prompts::build_coaching_prompt;
use crate::models::EvaluationResult;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-oss-20b:free";

/// Configuration for the coaching feedback client (OpenAI-compatible chat API)
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// API key (from OPENROUTER_API_KEY env var)
    pub api_key: String,
    /// Base URL of the API, without the `/chat/completions` suffix
    pub base_url: String,
    /// Model to use
    pub model: String,
    /// Temperature (0-2, lower = more deterministic)
    pub temperature: f64,
    /// Maximum tokens in response
    pub max_tokens: u32,
}

impl ChatConfig {
    /// Create config from environment variables
    ///
    /// OPENROUTER_API_KEY is required; PARLANCE_COACH_URL and
    /// PARLANCE_COACH_MODEL override the endpoint and model.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENROUTER_API_KEY")
            .context("OPENROUTER_API_KEY environment variable not set")?;

        let mut config = Self::new(api_key);
        if let Ok(base_url) = std::env::var("PARLANCE_COACH_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("PARLANCE_COACH_MODEL") {
            config.model = model;
        }
        Ok(config)
    }

    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.7,
            max_tokens: 1024,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Generates supportive coaching feedback for an evaluated answer
///
/// The text it produces is additive: it never feeds back into scores.
pub struct CoachClient {
    client: Client,
    config: ChatConfig,
}

impl CoachClient {
    pub fn new(config: ChatConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Ask the model for coaching feedback on `transcript`
    pub async fn generate(&self, transcript: &str, evaluation: &EvaluationResult) -> Result<String> {
        let prompt = build_coaching_prompt(transcript, evaluation);
        self.send_message(&prompt).await
    }

    /// Send a single user message and return the first choice's text
    pub async fn send_message(&self, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
            messages: vec![Message {
                role: "user".to_string(),
                content: user.to_string(),
            }],
        };

        debug!("Requesting coaching feedback from {}", self.config.model);

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Chat API error: {} - {}", status, body);
        }

        let response: ChatResponse = response
            .json()
            .await
            .context("Failed to parse chat API response")?;

        response.first_text().context("No text content in response")
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    fn first_text(&self) -> Option<String> {
        self.choices
            .first()
            .and_then(|c| c.message.content.clone())
            .filter(|text| !text.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_cleanly() {
        let mut config = ChatConfig::new("key".to_string());
        config.base_url = "http://localhost:4000/v1/".to_string();
        assert_eq!(config.endpoint(), "http://localhost:4000/v1/chat/completions");
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "m".to_string(),
            max_tokens: 10,
            temperature: None,
            messages: vec![Message {
                role: "user".to_string(),
                content: "hi".to_string(),
            }],
        };
        let value = serde_json::to_value(&request).unwrap();

        assert!(value.get("temperature").is_none());
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn test_first_text() {
        let json = r#"{"choices": [{"message": {"role": "assistant", "content": "Nice answer."}}]}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Nice answer."));

        let empty: ChatResponse =
            serde_json::from_str(r#"{"choices": [{"message": {"content": null}}]}"#).unwrap();
        assert!(empty.first_text().is_none());
    }
}
