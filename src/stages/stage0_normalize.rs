use once_cell::sync::Lazy;
use regex::Regex;

/// A question mark this close to the start marks the end of the interviewer's prompt
pub const QUESTION_SCAN_CHARS: usize = 200;

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s']").expect("valid punctuation pattern"));
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("valid word pattern"));

/// Lowercased, punctuation-free view of a transcript used only for counting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated tokens, apostrophes kept ("don't" is one token)
    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Number of `\w+` runs ("don't" counts as two words)
    pub fn word_count(&self) -> usize {
        WORD.find_iter(&self.0).count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Remove an interviewer's question transcribed ahead of the answer
///
/// If the first `?` falls within the first [`QUESTION_SCAN_CHARS`] characters,
/// everything up to and including it is dropped and the rest trimmed.
/// Otherwise the text is returned unchanged.
pub fn strip_leading_question(text: &str) -> &str {
    let question = text
        .char_indices()
        .take(QUESTION_SCAN_CHARS)
        .find(|(_, c)| *c == '?');

    match question {
        Some((pos, _)) => text[pos + 1..].trim(),
        None => text,
    }
}

/// Build the counting view of a transcript
///
/// Lowercase, replace everything except word characters, whitespace and
/// apostrophes with a space, collapse whitespace, trim.
pub fn normalize(text: &str) -> NormalizedText {
    let lower = text.to_lowercase();
    let spaced = PUNCTUATION.replace_all(&lower, " ");
    let collapsed = WHITESPACE.replace_all(&spaced, " ");
    NormalizedText(collapsed.trim().to_string())
}
