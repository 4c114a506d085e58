use anyhow::Result;
use tracing::{debug, info};

use crate::errors::EvaluationError;
use crate::heuristics::{FillerConfig, FillerDetector, FillerReport};
use crate::models::{round_to, EvaluationResult, ScoringConfig, SentimentSummary};
use crate::nlp::{PosTagger, SentimentScorer};
use crate::stages::{
    compose_feedback, measure_clarity, measure_tone, normalize, score_signals,
    strip_leading_question, ClarityReport,
};

/// Configuration for the evaluator
#[derive(Debug, Clone)]
pub struct EvaluatorConfig {
    /// Drop an interviewer question transcribed ahead of the answer
    pub strip_question: bool,
    /// Filler vocabularies and counting mode
    pub fillers: FillerConfig,
    /// Threshold tables and weights
    pub scoring: ScoringConfig,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            strip_question: true,
            fillers: FillerConfig::default(),
            scoring: ScoringConfig::default(),
        }
    }
}

/// An evaluation together with the intermediate measurements behind it
#[derive(Debug, Clone)]
pub struct Analysis {
    pub result: EvaluationResult,
    /// The text that was analyzed (question stripped when enabled)
    pub answer: String,
    pub fillers: FillerReport,
    pub clarity: ClarityReport,
}

/// Scores transcripts using an injected tagger and sentiment scorer
///
/// Holds no mutable state: the same transcript always yields the same result
/// for deterministic collaborators, and one evaluator can serve concurrent
/// callers when its collaborators are `Sync`.
pub struct Evaluator<T, S> {
    tagger: T,
    scorer: S,
    fillers: FillerDetector,
    scoring: ScoringConfig,
    strip_question: bool,
}

impl<T: PosTagger, S: SentimentScorer> Evaluator<T, S> {
    pub fn new(tagger: T, scorer: S) -> Result<Self> {
        Self::with_config(tagger, scorer, EvaluatorConfig::default())
    }

    pub fn with_config(tagger: T, scorer: S, config: EvaluatorConfig) -> Result<Self> {
        config.scoring.validate()?;
        let fillers = FillerDetector::new(&config.fillers)?;

        Ok(Self {
            tagger,
            scorer,
            fillers,
            scoring: config.scoring,
            strip_question: config.strip_question,
        })
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// Score one transcript
    pub fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, EvaluationError> {
        self.analyze(transcript).map(|analysis| analysis.result)
    }

    /// Score one transcript and keep the measurements used for the report
    ///
    /// 1. Reject blank input
    /// 2. Strip a leading interviewer question (if enabled)
    /// 3. Normalize and count words; reject when nothing countable remains
    /// 4. Count fillers, measure clarity and tone
    /// 5. Band the signals, combine them and compose feedback
    pub fn analyze(&self, transcript: &str) -> Result<Analysis, EvaluationError> {
        if transcript.trim().is_empty() {
            debug!("Rejecting blank transcript");
            return Err(EvaluationError::EmptyTranscript);
        }

        let answer = self.answer_text(transcript);
        let normalized = normalize(answer);
        let total_words = normalized.word_count();
        if total_words == 0 {
            debug!("Rejecting transcript without countable words");
            return Err(EvaluationError::NoWords);
        }

        let fillers = self.fillers.count(&normalized);
        let filler_ratio = fillers.ratio(total_words);
        debug!(
            "Fillers: {} phrases, {} words over {} words",
            fillers.phrase_count, fillers.word_count, total_words
        );

        let clarity = measure_clarity(&self.tagger, answer, total_words)?;
        let tone = measure_tone(&self.scorer, answer)?;

        let card = score_signals(&self.scoring, filler_ratio, clarity.ratio, tone.compound)?;
        let scores = card.sub_scores();
        let feedback = compose_feedback(&scores);

        info!(
            "Evaluated {} words: filler {}, clarity {}, sentiment {}, final {}",
            total_words, scores.filler, scores.clarity, scores.sentiment, scores.overall
        );

        let result = EvaluationResult {
            total_words,
            filler_ratio: round_to(filler_ratio, 3),
            clarity_ratio: round_to(clarity.ratio, 3),
            sentiment: SentimentSummary {
                compound: round_to(tone.compound, 4),
                label: card.sentiment.label,
            },
            scores,
            feedback,
        };

        Ok(Analysis {
            result,
            answer: answer.to_string(),
            fillers,
            clarity,
        })
    }

    /// The part of the transcript that is analyzed
    pub fn answer_text<'a>(&self, transcript: &'a str) -> &'a str {
        if self.strip_question {
            strip_leading_question(transcript)
        } else {
            transcript
        }
    }
}
