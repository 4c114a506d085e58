use anyhow::{Context, Result};
use vader_sentiment::SentimentIntensityAnalyzer;

use super::SentimentScorer;
use crate::models::SentimentScores;

/// Lexicon and rule based sentiment scorer (VADER)
pub struct VaderScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        let scores = self.analyzer.polarity_scores(text);
        let get = |key: &str| {
            scores
                .get(key)
                .copied()
                .with_context(|| format!("VADER scores missing '{}'", key))
        };

        let positive = get("pos")?;
        let negative = get("neg")?;
        // Without a lexicon hit the `!`/`?` emphasis has nothing to amplify
        let compound = if positive == 0.0 && negative == 0.0 {
            0.0
        } else {
            get("compound")?
        };

        Ok(SentimentScores {
            compound,
            positive,
            neutral: get("neu")?,
            negative,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polarity_direction() {
        let scorer = VaderScorer::new();

        let happy = scorer
            .score("I love this project, it was a great and rewarding success!")
            .unwrap();
        let sad = scorer
            .score("It was a terrible, awful failure and I hated it.")
            .unwrap();

        assert!(happy.compound > 0.5);
        assert!(sad.compound < 0.0);
        assert!((-1.0..=1.0).contains(&happy.compound));
    }

    #[test]
    fn test_punctuation_alone_is_neutral() {
        let scorer = VaderScorer::new();

        for text in ["I did it!!!", "We shipped the code?", "I built a system!"] {
            let scores = scorer.score(text).unwrap();
            assert_eq!(scores.compound, 0.0, "{}", text);
            assert_eq!(scores.positive, 0.0);
            assert_eq!(scores.negative, 0.0);
        }
    }

    #[test]
    fn test_emphasis_still_amplifies_polar_text() {
        let scorer = VaderScorer::new();

        let plain = scorer.score("The launch was great").unwrap();
        let emphatic = scorer.score("The launch was great!!!").unwrap();

        assert!(plain.compound > 0.0);
        assert!(emphatic.compound > plain.compound);
    }
}
