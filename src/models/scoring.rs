use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// The three signals that feed the final score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Signal {
    /// Filler words per counted word
    Filler,
    /// Nouns and verbs per counted word
    Clarity,
    /// Compound sentiment polarity
    Sentiment,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Signal::Filler => "filler",
            Signal::Clarity => "clarity",
            Signal::Sentiment => "sentiment",
        };
        f.write_str(name)
    }
}

/// Condition a signal value must satisfy for a band to apply
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "when", content = "bound", rename_all = "snake_case")]
pub enum Condition {
    /// value < bound
    Below(f64),
    /// value > bound
    Above(f64),
    /// value >= bound
    AtLeast(f64),
    /// Matches anything; closes every band list
    Always,
}

impl Condition {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Condition::Below(bound) => value < bound,
            Condition::Above(bound) => value > bound,
            Condition::AtLeast(bound) => value >= bound,
            Condition::Always => true,
        }
    }
}

/// One row of a threshold table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub condition: Condition,
    /// Sub-score awarded when the condition holds
    pub score: u32,
    /// Human label for the bucket, reported with the result
    pub label: String,
    /// Shorter label for the quick view; falls back to `label`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_label: Option<String>,
}

impl Band {
    pub fn new(condition: Condition, score: u32, label: &str) -> Self {
        Self {
            condition,
            score,
            label: label.to_string(),
            short_label: None,
        }
    }

    pub fn with_short_label(mut self, short_label: &str) -> Self {
        self.short_label = Some(short_label.to_string());
        self
    }

    pub fn quick_label(&self) -> &str {
        self.short_label.as_deref().unwrap_or(&self.label)
    }
}

/// Threshold tables and weights used to turn ratios into scores
///
/// Bands are checked in order and the first matching one wins, so every list
/// must end with an [`Condition::Always`] band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub filler_bands: Vec<Band>,
    pub clarity_bands: Vec<Band>,
    pub sentiment_bands: Vec<Band>,
    /// Highest sub-score a band can award; sub-scores are normalized by it
    pub max_band_score: u32,
    /// Share of the 100-point scale carried by each signal
    pub filler_weight: f64,
    pub clarity_weight: f64,
    pub sentiment_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            filler_bands: vec![
                Band::new(Condition::Below(0.03), 30, "Low"),
                Band::new(Condition::Below(0.07), 20, "Medium"),
                Band::new(Condition::Always, 10, "High"),
            ],
            clarity_bands: vec![
                Band::new(Condition::Above(0.55), 30, "Clear"),
                Band::new(Condition::Above(0.40), 20, "Moderate"),
                Band::new(Condition::Always, 10, "Low"),
            ],
            sentiment_bands: vec![
                Band::new(Condition::AtLeast(0.60), 30, "Positive"),
                Band::new(Condition::AtLeast(0.20), 24, "Neutral/Moderate")
                    .with_short_label("Neutral"),
                Band::new(Condition::Always, 15, "Negative"),
            ],
            max_band_score: 30,
            filler_weight: 40.0,
            clarity_weight: 40.0,
            sentiment_weight: 20.0,
        }
    }
}

impl ScoringConfig {
    /// Load a config from a JSON file; missing fields fall back to the defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;
        let config: Self =
            serde_json::from_str(&content).context("Failed to parse scoring config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every band list is usable
    pub fn validate(&self) -> Result<()> {
        if self.max_band_score == 0 {
            bail!("max_band_score must be positive");
        }

        for signal in [Signal::Filler, Signal::Clarity, Signal::Sentiment] {
            let bands = self.bands(signal);
            match bands.last() {
                None => bail!("{} bands are empty", signal),
                Some(last) if last.condition != Condition::Always => {
                    bail!("{} bands must end with an `always` band", signal)
                }
                _ => {}
            }
            if let Some(band) = bands.iter().find(|b| b.score > self.max_band_score) {
                bail!(
                    "{} band '{}' scores {} above max_band_score {}",
                    signal,
                    band.label,
                    band.score,
                    self.max_band_score
                );
            }
            if self.weight(signal) < 0.0 {
                bail!("{} weight must not be negative", signal);
            }
        }

        Ok(())
    }

    pub fn bands(&self, signal: Signal) -> &[Band] {
        match signal {
            Signal::Filler => &self.filler_bands,
            Signal::Clarity => &self.clarity_bands,
            Signal::Sentiment => &self.sentiment_bands,
        }
    }

    pub fn weight(&self, signal: Signal) -> f64 {
        match signal {
            Signal::Filler => self.filler_weight,
            Signal::Clarity => self.clarity_weight,
            Signal::Sentiment => self.sentiment_weight,
        }
    }

    /// First band whose condition holds for `value`
    pub fn classify(&self, signal: Signal, value: f64) -> Option<&Band> {
        self.bands(signal)
            .iter()
            .find(|band| band.condition.matches(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ScoringConfig::default().validate().is_ok());
    }

    #[test]
    fn test_boundaries_are_half_open() {
        let config = ScoringConfig::default();

        assert_eq!(config.classify(Signal::Filler, 0.0299).unwrap().score, 30);
        assert_eq!(config.classify(Signal::Filler, 0.03).unwrap().score, 20);
        assert_eq!(config.classify(Signal::Filler, 0.07).unwrap().score, 10);

        assert_eq!(config.classify(Signal::Clarity, 0.5501).unwrap().score, 30);
        assert_eq!(config.classify(Signal::Clarity, 0.55).unwrap().score, 20);
        assert_eq!(config.classify(Signal::Clarity, 0.40).unwrap().score, 10);

        let positive = config.classify(Signal::Sentiment, 0.60).unwrap();
        assert_eq!(positive.score, 30);
        assert_eq!(positive.label, "Positive");
        assert_eq!(config.classify(Signal::Sentiment, 0.20).unwrap().score, 24);
        assert_eq!(config.classify(Signal::Sentiment, 0.1999).unwrap().score, 15);
    }

    #[test]
    fn test_quick_labels() {
        let config = ScoringConfig::default();

        let neutral = config.classify(Signal::Sentiment, 0.3).unwrap();
        assert_eq!(neutral.label, "Neutral/Moderate");
        assert_eq!(neutral.quick_label(), "Neutral");
        assert_eq!(
            config.classify(Signal::Sentiment, 0.7).unwrap().quick_label(),
            "Positive"
        );
        assert_eq!(config.classify(Signal::Filler, 0.1).unwrap().quick_label(), "High");
    }

    #[test]
    fn test_validate_rejects_open_band_list() {
        let config = ScoringConfig {
            clarity_bands: vec![Band::new(Condition::Above(0.5), 30, "Clear")],
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("clarity"));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scoring.json");
        std::fs::write(
            &path,
            r#"{
                "sentiment_bands": [
                    {"condition": {"when": "at_least", "bound": 0.5}, "score": 30, "label": "Upbeat"},
                    {"condition": {"when": "always"}, "score": 10, "label": "Flat"}
                ]
            }"#,
        )
        .unwrap();

        let config = ScoringConfig::from_json_file(&path).unwrap();

        assert_eq!(config.sentiment_bands.len(), 2);
        assert_eq!(config.classify(Signal::Sentiment, 0.55).unwrap().label, "Upbeat");
        assert_eq!(config.filler_bands, ScoringConfig::default().filler_bands);
    }
}
