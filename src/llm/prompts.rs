use crate::models::EvaluationResult;

/// Instructions for the coaching model
pub const COACHING_INSTRUCTIONS: &str = r#"You are a professional interview communication coach.
Your goal is to give thoughtful, clear, and structured feedback:
not short, not over-simplified, and not casual.

Write feedback using this structure and clear formatting:

1) **Overall Impression**
2-3 sentences describing how the candidate sounded overall (clarity, calmness, confidence).

2) **Strengths**
Bullet list of 2-3 positive points.
Keep each bullet to one sentence.

3) **Areas for Improvement**
Bullet list of 3-4 improvements.
Each bullet must be clear, actionable, and specific.
No repeated or vague advice.

4) **Closing Encouragement**
One sentence that is supportive but professional."#;

/// Build the user prompt for coaching feedback
///
/// The metrics inform the model but it is asked not to quote them.
pub fn build_coaching_prompt(transcript: &str, evaluation: &EvaluationResult) -> String {
    let mut prompt = String::new();

    prompt.push_str(COACHING_INSTRUCTIONS);
    prompt.push_str("\n\n---\n\n");

    prompt.push_str("Candidate's answer:\n");
    prompt.push_str(transcript.trim());
    prompt.push_str("\n\n");

    prompt.push_str("Evaluation metrics to inform your feedback (do not repeat them directly):\n");
    prompt.push_str(&format!("- Filler Ratio: {}\n", evaluation.filler_ratio));
    prompt.push_str(&format!("- Clarity Ratio: {}\n", evaluation.clarity_ratio));
    prompt.push_str(&format!("- Tone: {}\n", evaluation.sentiment.label));
    prompt.push_str(&format!("- Final Score: {}\n", evaluation.scores.overall));

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SentimentSummary, SubScores};

    #[test]
    fn test_prompt_includes_answer_and_metrics() {
        let evaluation = EvaluationResult {
            total_words: 54,
            filler_ratio: 0.02,
            clarity_ratio: 0.48,
            sentiment: SentimentSummary {
                compound: 0.72,
                label: "Positive".to_string(),
            },
            scores: SubScores {
                filler: 30,
                clarity: 20,
                sentiment: 30,
                overall: 87,
            },
            feedback: String::new(),
        };

        let prompt = build_coaching_prompt("  I built a movie recommender.\n", &evaluation);

        assert!(prompt.starts_with("You are a professional interview communication coach."));
        assert!(prompt.contains("Candidate's answer:\nI built a movie recommender.\n"));
        assert!(prompt.contains("- Filler Ratio: 0.02\n"));
        assert!(prompt.contains("- Tone: Positive\n"));
        assert!(prompt.contains("- Final Score: 87\n"));
        assert!(!prompt.contains("total_words"));
    }
}
