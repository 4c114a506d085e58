use tracing::debug;

use crate::errors::EvaluationError;
use crate::models::SentimentScores;
use crate::nlp::SentimentScorer;

/// Score the tone of the raw transcript
///
/// The compound value is clamped to [-1, 1]; a non-finite value is treated as
/// a scorer failure.
pub fn measure_tone<S: SentimentScorer + ?Sized>(
    scorer: &S,
    transcript: &str,
) -> Result<SentimentScores, EvaluationError> {
    let mut scores = scorer.score(transcript).map_err(EvaluationError::Sentiment)?;

    if !scores.compound.is_finite() {
        return Err(EvaluationError::Sentiment(anyhow::anyhow!(
            "scorer returned a non-finite compound value: {}",
            scores.compound
        )));
    }
    scores.compound = scores.compound.clamp(-1.0, 1.0);

    debug!("Tone: compound {:.4}", scores.compound);

    Ok(scores)
}
