pub mod errors;
pub mod heuristics;
pub mod io;
pub mod llm;
pub mod models;
pub mod nlp;
pub mod pipeline;
pub mod stages;

pub use errors::EvaluationError;
pub use heuristics::{FillerConfig, FillerCounting, FillerDetector, FillerReport};
pub use io::{read_transcript_file, write_json, EvaluationOutput, EvaluationReport};
pub use llm::{ChatConfig, CoachClient, WhisperClient, WhisperConfig};
pub use models::{
    Band, Condition, ErrorReport, EvaluationResult, PartOfSpeech, Rating, ScoringConfig,
    SentimentScores, SentimentSummary, Signal, SubScores, TaggedToken,
};
pub use nlp::{HttpTagger, PosTagger, SentimentScorer, TaggerConfig, VaderScorer};
pub use pipeline::{Analysis, Evaluator, EvaluatorConfig};
pub use stages::{normalize, strip_leading_question, ClarityReport, NormalizedText};
