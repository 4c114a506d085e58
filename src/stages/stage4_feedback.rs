use crate::models::{Signal, SubScores};

/// Message used when no rule fires
pub const EXCELLENT_FEEDBACK: &str = "Excellent clarity, confidence, and tone!";

/// Appends `message` when the signal's sub-score is below `below`
#[derive(Debug, Clone, Copy)]
pub struct FeedbackRule {
    pub signal: Signal,
    pub below: u32,
    pub message: &'static str,
}

impl FeedbackRule {
    pub fn fires(&self, scores: &SubScores) -> bool {
        let score = match self.signal {
            Signal::Filler => scores.filler,
            Signal::Clarity => scores.clarity,
            Signal::Sentiment => scores.sentiment,
        };
        score < self.below
    }
}

/// Checked in order; every rule is independent of the others
pub const FEEDBACK_RULES: [FeedbackRule; 3] = [
    FeedbackRule {
        signal: Signal::Filler,
        below: 20,
        message: "Try to reduce filler words and hesitation phrases.",
    },
    FeedbackRule {
        signal: Signal::Clarity,
        below: 20,
        message: "Use more clear, specific, and action-oriented sentences.",
    },
    FeedbackRule {
        signal: Signal::Sentiment,
        below: 24,
        message: "Aim for a more confident and positive tone.",
    },
];

/// Join the messages of all firing rules with single spaces
pub fn compose_feedback(scores: &SubScores) -> String {
    let parts: Vec<&str> = FEEDBACK_RULES
        .iter()
        .filter(|rule| rule.fires(scores))
        .map(|rule| rule.message)
        .collect();

    if parts.is_empty() {
        EXCELLENT_FEEDBACK.to_string()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(filler: u32, clarity: u32, sentiment: u32) -> SubScores {
        SubScores {
            filler,
            clarity,
            sentiment,
            overall: 0,
        }
    }

    #[test]
    fn test_no_rule_fires() {
        assert_eq!(compose_feedback(&scores(30, 30, 30)), EXCELLENT_FEEDBACK);
        // The rules use their own thresholds, not the top band
        assert_eq!(compose_feedback(&scores(20, 20, 24)), EXCELLENT_FEEDBACK);
    }

    #[test]
    fn test_single_rule() {
        assert_eq!(
            compose_feedback(&scores(10, 30, 30)),
            "Try to reduce filler words and hesitation phrases."
        );
        assert_eq!(
            compose_feedback(&scores(30, 30, 15)),
            "Aim for a more confident and positive tone."
        );
    }

    #[test]
    fn test_all_rules_keep_order() {
        assert_eq!(
            compose_feedback(&scores(10, 10, 15)),
            "Try to reduce filler words and hesitation phrases. \
             Use more clear, specific, and action-oriented sentences. \
             Aim for a more confident and positive tone."
        );
    }
}
