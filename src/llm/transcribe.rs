use std::path::Path;

use anyhow::{Context, Result};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;

/// Audio formats accepted for transcription
pub const SUPPORTED_AUDIO_EXTENSIONS: [&str; 3] = ["mp3", "wav", "m4a"];

/// Configuration for the speech-to-text client (OpenAI-compatible audio API)
#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// API key; local servers usually need none
    pub api_key: Option<String>,
    /// Base URL of the API, without the `/audio/transcriptions` suffix
    pub base_url: String,
    /// Speech model name
    pub model: String,
}

impl Default for WhisperConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "whisper-1".to_string(),
        }
    }
}

impl WhisperConfig {
    /// Create config from OPENAI_API_KEY, PARLANCE_WHISPER_URL and PARLANCE_WHISPER_MODEL
    pub fn from_env() -> Self {
        let mut config = Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            ..Self::default()
        };
        if let Ok(base_url) = std::env::var("PARLANCE_WHISPER_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = std::env::var("PARLANCE_WHISPER_MODEL") {
            config.model = model;
        }
        config
    }

    fn endpoint(&self) -> String {
        format!("{}/audio/transcriptions", self.base_url.trim_end_matches('/'))
    }
}

/// Check an audio path against [`SUPPORTED_AUDIO_EXTENSIONS`]
pub fn is_supported_audio(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_AUDIO_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Speech-to-text client
pub struct WhisperClient {
    client: Client,
    config: WhisperConfig,
}

impl WhisperClient {
    pub fn new(config: WhisperConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    /// Transcribe an audio file to plain text
    pub async fn transcribe(&self, path: &Path) -> Result<String> {
        if !is_supported_audio(path) {
            anyhow::bail!(
                "Unsupported audio file {:?} (expected one of: {})",
                path,
                SUPPORTED_AUDIO_EXTENSIONS.join(", ")
            );
        }

        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read audio file: {:?}", path))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        info!(
            "Transcribing {} ({} bytes) with {}",
            file_name,
            bytes.len(),
            self.config.model
        );

        let form = Form::new()
            .text("model", self.config.model.clone())
            .part("file", Part::bytes(bytes).file_name(file_name));

        let mut request = self.client.post(self.config.endpoint()).multipart(form);
        if let Some(api_key) = &self.config.api_key {
            request = request.bearer_auth(api_key);
        }

        let response = request
            .send()
            .await
            .context("Failed to send request to transcription API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Transcription API error: {} - {}", status, body);
        }

        let response: TranscriptionResponse = response
            .json()
            .await
            .context("Failed to parse transcription API response")?;

        info!("Transcription complete: {} chars", response.text.len());
        Ok(response.text)
    }
}

#[derive(Debug, Deserialize)]
struct TranscriptionResponse {
    text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_audio() {
        assert!(is_supported_audio(Path::new("answer.mp3")));
        assert!(is_supported_audio(Path::new("/tmp/answer.WAV")));
        assert!(is_supported_audio(Path::new("clip.m4a")));
        assert!(!is_supported_audio(Path::new("notes.txt")));
        assert!(!is_supported_audio(Path::new("no_extension")));
    }

    #[test]
    fn test_default_endpoint() {
        let config = WhisperConfig::default();
        assert_eq!(config.endpoint(), "https://api.openai.com/v1/audio/transcriptions");
    }

    #[tokio::test]
    async fn test_rejects_unsupported_file_before_reading() {
        let client = WhisperClient::new(WhisperConfig::default());
        let err = client
            .transcribe(Path::new("/does/not/exist.txt"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Unsupported audio file"));
    }
}
