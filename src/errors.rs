use thiserror::Error;

use crate::models::{ErrorReport, Signal};

/// Reasons an evaluation produced no result.
///
/// `EmptyTranscript` and `NoWords` are input errors: they are reported to the
/// caller as an [`ErrorReport`] rather than treated as failures. Every other
/// variant aborts the evaluation.
#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("Empty transcript")]
    EmptyTranscript,

    #[error("Transcript has no words")]
    NoWords,

    #[error("part-of-speech tagging failed: {0:#}")]
    Tagging(#[source] anyhow::Error),

    #[error("sentiment scoring failed: {0:#}")]
    Sentiment(#[source] anyhow::Error),

    #[error("no {signal} band matches value {value}")]
    Unscored { signal: Signal, value: f64 },
}

impl EvaluationError {
    /// Whether the error comes from the transcript itself rather than a collaborator
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::EmptyTranscript | Self::NoWords)
    }

    /// Structured form of an input error, `None` for fatal errors
    pub fn to_report(&self) -> Option<ErrorReport> {
        self.is_input_error().then(|| ErrorReport {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(EvaluationError::EmptyTranscript.to_string(), "Empty transcript");
        assert_eq!(EvaluationError::NoWords.to_string(), "Transcript has no words");
    }

    #[test]
    fn test_collaborator_errors_have_no_report() {
        let err = EvaluationError::Tagging(anyhow::anyhow!("connection refused"));
        assert!(!err.is_input_error());
        assert!(err.to_report().is_none());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_report_serializes_as_error_object() {
        let report = EvaluationError::NoWords.to_report().unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"error":"Transcript has no words"}"#);
    }
}
