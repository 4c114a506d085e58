use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::heuristics::FillerReport;
use crate::models::{EvaluationResult, Rating, ScoringConfig, Signal};
use crate::pipeline::Analysis;
use crate::stages::ClarityReport;

/// Machine-readable output: the evaluation plus optional coaching text
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationOutput<'a> {
    #[serde(flatten)]
    pub result: &'a EvaluationResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coaching: Option<&'a str>,
}

/// Write any serializable value as pretty JSON
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}

/// Human-readable evaluation report
pub struct EvaluationReport<'a> {
    result: &'a EvaluationResult,
    scoring: &'a ScoringConfig,
    transcript: Option<&'a str>,
    fillers: Option<&'a FillerReport>,
    clarity: Option<&'a ClarityReport>,
    coaching: Option<&'a str>,
}

impl<'a> EvaluationReport<'a> {
    pub fn new(result: &'a EvaluationResult, scoring: &'a ScoringConfig) -> Self {
        Self {
            result,
            scoring,
            transcript: None,
            fillers: None,
            clarity: None,
            coaching: None,
        }
    }

    /// Report on a full analysis: analyzed text, filler and tag breakdowns
    pub fn from_analysis(analysis: &'a Analysis, scoring: &'a ScoringConfig) -> Self {
        Self::new(&analysis.result, scoring)
            .with_transcript(&analysis.answer)
            .with_fillers(&analysis.fillers)
            .with_clarity(&analysis.clarity)
    }

    pub fn with_transcript(mut self, transcript: &'a str) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn with_clarity(mut self, clarity: &'a ClarityReport) -> Self {
        self.clarity = Some(clarity);
        self
    }

    pub fn with_fillers(mut self, fillers: &'a FillerReport) -> Self {
        self.fillers = Some(fillers);
        self
    }

    pub fn with_coaching(mut self, coaching: &'a str) -> Self {
        self.coaching = Some(coaching);
        self
    }

    /// Format the report as text
    pub fn format(&self) -> String {
        let result = self.result;
        let mut output = String::new();

        let rating = Rating::from_score(result.scores.overall);
        output.push_str(&format!(
            "Communication Score: {} / 100 ({})\n\n",
            result.scores.overall,
            rating.label()
        ));

        if let Some(transcript) = self.transcript {
            push_heading(&mut output, "Transcript");
            output.push_str(&wrap_text(transcript, 80));
            output.push_str("\n\n");
        }

        push_heading(&mut output, "Quick View");
        output.push_str(&format!("Total words:   {}\n", result.total_words));
        output.push_str(&format!(
            "Filler usage:  {}\n",
            self.bucket(Signal::Filler, result.filler_ratio)
        ));
        output.push_str(&format!(
            "Clarity level: {}\n",
            self.bucket(Signal::Clarity, result.clarity_ratio)
        ));
        output.push_str(&format!(
            "Tone:          {}\n\n",
            self.bucket(Signal::Sentiment, result.sentiment.compound)
        ));

        push_heading(&mut output, "Details");
        output.push_str(&format!(
            "Filler ratio:  {} (score {})\n",
            result.filler_ratio, result.scores.filler
        ));
        output.push_str(&format!(
            "Clarity ratio: {} (score {})\n",
            result.clarity_ratio, result.scores.clarity
        ));
        output.push_str(&format!(
            "Sentiment:     {} ({}, score {})\n",
            result.sentiment.label, result.sentiment.compound, result.scores.sentiment
        ));
        if let Some(fillers) = self.fillers.filter(|f| f.total() > 0) {
            let counts: Vec<String> = fillers
                .per_filler
                .iter()
                .map(|(filler, count)| format!("\"{}\" x{}", filler, count))
                .collect();
            output.push_str(&format!("Fillers:       {}\n", counts.join(", ")));
        }
        if let Some(clarity) = self.clarity {
            let counts: Vec<String> = clarity
                .pos_counts
                .iter()
                .filter(|(pos, _)| pos.is_lexical())
                .map(|(pos, count)| format!("{} {}", pos.as_str(), count))
                .collect();
            if !counts.is_empty() {
                output.push_str(&format!("Word classes:  {}\n", counts.join(", ")));
            }
        }
        output.push('\n');

        push_heading(&mut output, "System Feedback");
        output.push_str(&wrap_text(&result.feedback, 80));
        output.push('\n');

        if let Some(coaching) = self.coaching {
            output.push('\n');
            push_heading(&mut output, "Coaching Feedback");
            output.push_str(coaching.trim());
            output.push('\n');
        }

        output
    }

    fn bucket(&self, signal: Signal, value: f64) -> &str {
        self.scoring
            .classify(signal, value)
            .map(|band| band.quick_label())
            .unwrap_or("-")
    }
}

fn push_heading(output: &mut String, title: &str) {
    output.push_str(title);
    output.push('\n');
    output.push_str(&"-".repeat(title.len()));
    output.push('\n');
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        if line_len + word.len() + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word.len();
    }

    result
}
