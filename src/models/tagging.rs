use serde::{Deserialize, Serialize};

/// Universal part-of-speech tags as reported by the tagger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PartOfSpeech {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
    Space,
    /// Any tag outside the universal set
    #[serde(other)]
    Other,
}

impl PartOfSpeech {
    /// Nouns and verbs carry the content measured by the clarity ratio.
    /// Proper nouns and auxiliaries are not counted.
    pub fn is_content(&self) -> bool {
        matches!(self, PartOfSpeech::Noun | PartOfSpeech::Verb)
    }

    /// Tags worth showing in a summary (no punctuation or whitespace)
    pub fn is_lexical(&self) -> bool {
        !matches!(self, PartOfSpeech::Punct | PartOfSpeech::Space)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PartOfSpeech::Adj => "ADJ",
            PartOfSpeech::Adp => "ADP",
            PartOfSpeech::Adv => "ADV",
            PartOfSpeech::Aux => "AUX",
            PartOfSpeech::Cconj => "CCONJ",
            PartOfSpeech::Det => "DET",
            PartOfSpeech::Intj => "INTJ",
            PartOfSpeech::Noun => "NOUN",
            PartOfSpeech::Num => "NUM",
            PartOfSpeech::Part => "PART",
            PartOfSpeech::Pron => "PRON",
            PartOfSpeech::Propn => "PROPN",
            PartOfSpeech::Punct => "PUNCT",
            PartOfSpeech::Sconj => "SCONJ",
            PartOfSpeech::Sym => "SYM",
            PartOfSpeech::Verb => "VERB",
            PartOfSpeech::X => "X",
            PartOfSpeech::Space => "SPACE",
            PartOfSpeech::Other => "OTHER",
        }
    }
}

/// A token produced by the tagger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedToken {
    pub text: String,
    pub pos: PartOfSpeech,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: PartOfSpeech) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Polarity scores from a sentiment scorer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    /// Normalized overall polarity in [-1, 1]
    pub compound: f64,
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub neutral: f64,
    #[serde(default)]
    pub negative: f64,
}

impl SentimentScores {
    pub fn from_compound(compound: f64) -> Self {
        Self {
            compound,
            positive: 0.0,
            neutral: 0.0,
            negative: 0.0,
        }
    }
}
