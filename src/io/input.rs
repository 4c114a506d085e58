use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Saved output of a speech-to-text API
#[derive(Debug, Deserialize)]
struct SavedTranscription {
    text: String,
}

/// Read a transcript from disk
///
/// `.json` files are read as saved transcription responses (`{"text": ...}`);
/// anything else is read as plain UTF-8 text.
pub fn read_transcript_file(path: &Path) -> Result<String> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_transcription_json(&content)
    } else {
        Ok(content)
    }
}

/// Extract the text of a saved transcription response
pub fn parse_transcription_json(json: &str) -> Result<String> {
    let saved: SavedTranscription =
        serde_json::from_str(json).context("Failed to parse transcription JSON")?;
    Ok(saved.text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_plain_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answer.txt");
        std::fs::write(&path, "Tell me about yourself? I build search systems.\n").unwrap();

        let text = read_transcript_file(&path).unwrap();
        assert_eq!(text, "Tell me about yourself? I build search systems.\n");
    }

    #[test]
    fn test_read_saved_transcription() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("answer.JSON");
        std::fs::write(&path, r#"{"text": " I led the migration.", "language": "en"}"#).unwrap();

        assert_eq!(read_transcript_file(&path).unwrap(), " I led the migration.");
    }

    #[test]
    fn test_missing_file() {
        let err = read_transcript_file(Path::new("/nonexistent/answer.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to read file"));
    }

    #[test]
    fn test_json_without_text() {
        assert!(parse_transcription_json(r#"{"segments": []}"#).is_err());
    }
}
