use std::collections::BTreeMap;

use tracing::debug;

use crate::errors::EvaluationError;
use crate::models::PartOfSpeech;
use crate::nlp::PosTagger;

/// Content-word density of a transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ClarityReport {
    /// Tokens tagged NOUN or VERB
    pub content_words: usize,
    /// All tokens returned by the tagger, punctuation included
    pub tagged_tokens: usize,
    /// Tokens per tag
    pub pos_counts: BTreeMap<PartOfSpeech, usize>,
    /// `content_words / max(total_words, 1)`
    pub ratio: f64,
}

/// Measure clarity by tagging the raw (unnormalized) transcript
///
/// The ratio is taken against `total_words` from the normalized text, not
/// against the tagger's own token count. A tagger failure aborts the evaluation.
pub fn measure_clarity<T: PosTagger + ?Sized>(
    tagger: &T,
    transcript: &str,
    total_words: usize,
) -> Result<ClarityReport, EvaluationError> {
    let tokens = tagger.tag(transcript).map_err(EvaluationError::Tagging)?;
    let content_words = tokens.iter().filter(|t| t.pos.is_content()).count();

    let mut pos_counts = BTreeMap::new();
    for token in &tokens {
        *pos_counts.entry(token.pos).or_insert(0) += 1;
    }

    debug!(
        "Clarity: {} content words out of {} tagged tokens",
        content_words,
        tokens.len()
    );

    Ok(ClarityReport {
        content_words,
        tagged_tokens: tokens.len(),
        pos_counts,
        ratio: content_words as f64 / total_words.max(1) as f64,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PartOfSpeech, TaggedToken};

    struct FixedTagger(Vec<TaggedToken>);

    impl PosTagger for FixedTagger {
        fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedToken>> {
            Ok(self.0.clone())
        }
    }

    struct BrokenTagger;

    impl PosTagger for BrokenTagger {
        fn tag(&self, _text: &str) -> anyhow::Result<Vec<TaggedToken>> {
            anyhow::bail!("model not loaded")
        }
    }

    #[test]
    fn test_counts_nouns_and_verbs() {
        let tagger = FixedTagger(vec![
            TaggedToken::new("I", PartOfSpeech::Pron),
            TaggedToken::new("built", PartOfSpeech::Verb),
            TaggedToken::new("a", PartOfSpeech::Det),
            TaggedToken::new("recommender", PartOfSpeech::Noun),
            TaggedToken::new("system", PartOfSpeech::Noun),
            TaggedToken::new(".", PartOfSpeech::Punct),
        ]);

        let report = measure_clarity(&tagger, "I built a recommender system.", 5).unwrap();

        assert_eq!(report.content_words, 3);
        assert_eq!(report.tagged_tokens, 6);
        assert_eq!(report.ratio, 0.6);
        assert_eq!(report.pos_counts[&PartOfSpeech::Noun], 2);
        assert_eq!(report.pos_counts[&PartOfSpeech::Verb], 1);
        assert_eq!(report.pos_counts[&PartOfSpeech::Punct], 1);
        assert!(!report.pos_counts.contains_key(&PartOfSpeech::Adj));
    }

    #[test]
    fn test_zero_words_does_not_divide_by_zero() {
        let tagger = FixedTagger(vec![TaggedToken::new("go", PartOfSpeech::Verb)]);
        let report = measure_clarity(&tagger, "go", 0).unwrap();
        assert_eq!(report.ratio, 1.0);
    }

    #[test]
    fn test_tagger_failure_is_fatal() {
        let err = measure_clarity(&BrokenTagger, "anything", 1).unwrap_err();
        assert!(matches!(err, EvaluationError::Tagging(_)));
        assert!(!err.is_input_error());
    }
}
