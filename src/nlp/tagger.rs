use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::PosTagger;
use crate::models::TaggedToken;

/// Configuration for the HTTP part-of-speech tagging service
#[derive(Debug, Clone)]
pub struct TaggerConfig {
    /// Endpoint accepting `{"text": ...}` and answering `{"tokens": [{"text", "pos"}]}`
    pub url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl TaggerConfig {
    /// Create config from the PARLANCE_TAGGER_URL environment variable
    pub fn from_env() -> Result<Self> {
        let url = std::env::var("PARLANCE_TAGGER_URL")
            .context("PARLANCE_TAGGER_URL environment variable not set")?;
        Ok(Self::new(url))
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

/// Part-of-speech tagger backed by a tagging service (e.g. a spaCy server)
///
/// Uses a blocking client: construct and call it off the async runtime.
pub struct HttpTagger {
    client: Client,
    config: TaggerConfig,
}

impl HttpTagger {
    pub fn new(config: TaggerConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build tagger HTTP client")?;
        Ok(Self { client, config })
    }
}

impl PosTagger for HttpTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        debug!("Tagging {} chars via {}", text.len(), self.config.url);

        let response = self
            .client
            .post(&self.config.url)
            .json(&TagRequest { text })
            .send()
            .context("Failed to send request to tagging service")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            anyhow::bail!("Tagging service error: {} - {}", status, body);
        }

        let body = response
            .text()
            .context("Failed to read tagging service response")?;
        parse_tag_response(&body)
    }
}

#[derive(Debug, Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct TagResponse {
    tokens: Vec<TaggedToken>,
}

/// Parse the tagging service's JSON body
pub fn parse_tag_response(body: &str) -> Result<Vec<TaggedToken>> {
    let response: TagResponse =
        serde_json::from_str(body).context("Failed to parse tagging service response")?;
    Ok(response.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PartOfSpeech;

    #[test]
    fn test_parse_tag_response() {
        let body = r#"{
            "tokens": [
                {"text": "I", "pos": "PRON"},
                {"text": "optimized", "pos": "VERB"},
                {"text": "training", "pos": "NOUN"},
                {"text": ".", "pos": "PUNCT"}
            ]
        }"#;

        let tokens = parse_tag_response(body).unwrap();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], TaggedToken::new("I", PartOfSpeech::Pron));
        assert_eq!(tokens[2].pos, PartOfSpeech::Noun);
    }

    #[test]
    fn test_parse_tag_response_rejects_other_shapes() {
        assert!(parse_tag_response(r#"{"words": []}"#).is_err());
        assert!(parse_tag_response("not json").is_err());
    }

    #[test]
    fn test_config_defaults() {
        let config = TaggerConfig::new("http://localhost:8080/tag");
        assert_eq!(config.url, "http://localhost:8080/tag");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }
}
