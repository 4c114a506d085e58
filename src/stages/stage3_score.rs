use crate::errors::EvaluationError;
use crate::models::{ScoringConfig, Signal, SubScores};

/// A signal value mapped through its band table
#[derive(Debug, Clone, PartialEq)]
pub struct BandedScore {
    pub score: u32,
    pub label: String,
}

/// All sub-scores of one transcript plus their labels
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub filler: BandedScore,
    pub clarity: BandedScore,
    pub sentiment: BandedScore,
    /// Weighted total on the 0-100 scale
    pub overall: u32,
}

impl ScoreCard {
    pub fn sub_scores(&self) -> SubScores {
        SubScores {
            filler: self.filler.score,
            clarity: self.clarity.score,
            sentiment: self.sentiment.score,
            overall: self.overall,
        }
    }
}

/// Map one signal value to its band
pub fn score_signal(
    config: &ScoringConfig,
    signal: Signal,
    value: f64,
) -> Result<BandedScore, EvaluationError> {
    config
        .classify(signal, value)
        .map(|band| BandedScore {
            score: band.score,
            label: band.label.clone(),
        })
        .ok_or(EvaluationError::Unscored { signal, value })
}

/// Band all three signals and combine them into the final score
pub fn score_signals(
    config: &ScoringConfig,
    filler_ratio: f64,
    clarity_ratio: f64,
    compound: f64,
) -> Result<ScoreCard, EvaluationError> {
    let filler = score_signal(config, Signal::Filler, filler_ratio)?;
    let clarity = score_signal(config, Signal::Clarity, clarity_ratio)?;
    let sentiment = score_signal(config, Signal::Sentiment, compound)?;
    let overall = weighted_total(config, filler.score, clarity.score, sentiment.score);

    Ok(ScoreCard {
        filler,
        clarity,
        sentiment,
        overall,
    })
}

/// `round(filler/max*w_f + clarity/max*w_c + sentiment/max*w_s)`, clamped to 0-100
///
/// Rounds half to even. With the default tables every sum is a multiple of
/// 1/3, so no tie can occur and half-up would give the same result.
pub fn weighted_total(config: &ScoringConfig, filler: u32, clarity: u32, sentiment: u32) -> u32 {
    let max = f64::from(config.max_band_score.max(1));
    let weighted = f64::from(filler) / max * config.filler_weight
        + f64::from(clarity) / max * config.clarity_weight
        + f64::from(sentiment) / max * config.sentiment_weight;

    weighted.round_ties_even().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Band, Condition};

    #[test]
    fn test_perfect_score() {
        let card = score_signals(&ScoringConfig::default(), 0.0, 0.8, 0.9).unwrap();
        assert_eq!(card.sub_scores(), SubScores {
            filler: 30,
            clarity: 30,
            sentiment: 30,
            overall: 100,
        });
        assert_eq!(card.sentiment.label, "Positive");
    }

    #[test]
    fn test_boundary_values() {
        let config = ScoringConfig::default();
        let card = score_signals(&config, 0.03, 0.55, 0.60).unwrap();

        assert_eq!(card.filler.score, 20);
        assert_eq!(card.clarity.score, 20);
        assert_eq!(card.sentiment.score, 30);
    }

    #[test]
    fn test_final_score_matches_formula_for_every_combination() {
        let config = ScoringConfig::default();

        for filler in [10u32, 20, 30] {
            for clarity in [10u32, 20, 30] {
                for sentiment in [15u32, 24, 30] {
                    let expected = (f64::from(filler) / 30.0 * 40.0
                        + f64::from(clarity) / 30.0 * 40.0
                        + f64::from(sentiment) / 30.0 * 20.0)
                        .round() as u32;
                    let total = weighted_total(&config, filler, clarity, sentiment);

                    assert_eq!(total, expected);
                    assert!(total <= 100);
                }
            }
        }
    }

    #[test]
    fn test_worst_score() {
        let card = score_signals(&ScoringConfig::default(), 1.0, 0.0, -1.0).unwrap();
        // 13.33 + 13.33 + 10
        assert_eq!(card.overall, 37);
        assert_eq!(card.sentiment.label, "Negative");
        assert_eq!(card.filler.label, "High");
    }

    #[test]
    fn test_rounds_half_to_even() {
        let config = ScoringConfig {
            max_band_score: 10,
            filler_weight: 2.5,
            clarity_weight: 0.0,
            sentiment_weight: 0.0,
            ..Default::default()
        };
        // 10/10 * 2.5 = 2.5 -> 2
        assert_eq!(weighted_total(&config, 10, 0, 0), 2);
    }

    #[test]
    fn test_unbanded_value_is_an_error() {
        let config = ScoringConfig {
            filler_bands: vec![Band::new(Condition::Below(0.5), 30, "Low")],
            ..Default::default()
        };

        let err = score_signals(&config, 0.9, 0.5, 0.5).unwrap_err();
        assert!(matches!(
            err,
            EvaluationError::Unscored {
                signal: Signal::Filler,
                ..
            }
        ));
    }
}
