use serde::{Deserialize, Serialize};

/// Outcome of scoring one transcript
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Words counted in the normalized transcript (always at least 1)
    pub total_words: usize,
    /// Filler matches per word, rounded to 3 decimals
    pub filler_ratio: f64,
    /// Nouns and verbs per word, rounded to 3 decimals
    pub clarity_ratio: f64,
    pub sentiment: SentimentSummary,
    pub scores: SubScores,
    /// Rule-based feedback sentences
    pub feedback: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    /// Compound polarity in [-1, 1], rounded to 4 decimals
    pub compound: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub filler: u32,
    pub clarity: u32,
    pub sentiment: u32,
    /// Weighted total on the 0-100 scale
    #[serde(rename = "final")]
    pub overall: u32,
}

/// Structured form of an input error, e.g. `{"error": "Empty transcript"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub error: String,
}

/// Coarse rating of a final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// 0-59
    NeedsWork,
    /// 60-79
    Fair,
    /// 80-100
    Strong,
}

impl Rating {
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=59 => Rating::NeedsWork,
            60..=79 => Rating::Fair,
            _ => Rating::Strong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rating::NeedsWork => "Needs work",
            Rating::Fair => "Fair",
            Rating::Strong => "Strong",
        }
    }
}

/// Round to a fixed number of decimal places, ties to even
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}
