use std::collections::{BTreeMap, HashSet};

use anyhow::{Context, Result};
use regex::Regex;

use super::{FillerConfig, FillerCounting};
use crate::stages::NormalizedText;

/// Filler counts for one transcript
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FillerReport {
    /// Matches of multi-word (or slang) phrases
    pub phrase_count: usize,
    /// Matches of single filler tokens
    pub word_count: usize,
    /// Matches per filler, keyed by its vocabulary entry
    pub per_filler: BTreeMap<String, usize>,
}

impl FillerReport {
    pub fn total(&self) -> usize {
        self.phrase_count + self.word_count
    }

    /// Fillers per counted word; a zero word count is treated as one
    pub fn ratio(&self, total_words: usize) -> f64 {
        self.total() as f64 / total_words.max(1) as f64
    }

    fn record(&mut self, filler: &str, is_phrase: bool, count: usize) {
        if count == 0 {
            return;
        }
        if is_phrase {
            self.phrase_count += count;
        } else {
            self.word_count += count;
        }
        *self.per_filler.entry(filler.to_string()).or_insert(0) += count;
    }
}

#[derive(Debug)]
struct Phrase {
    text: String,
    words: Vec<String>,
    pattern: Regex,
}

impl Phrase {
    fn matches_at(&self, tokens: &[&str]) -> bool {
        self.words.len() <= tokens.len()
            && self.words.iter().zip(tokens).all(|(word, token)| word == token)
    }
}

/// Counts filler phrases and words in normalized text
#[derive(Debug)]
pub struct FillerDetector {
    /// Longest phrases first so that greedy matching prefers them
    phrases: Vec<Phrase>,
    words: HashSet<String>,
    counting: FillerCounting,
}

impl FillerDetector {
    pub fn new(config: &FillerConfig) -> Result<Self> {
        let mut phrases = Vec::with_capacity(config.phrases.len());

        for entry in &config.phrases {
            let words: Vec<String> = entry
                .to_lowercase()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if words.is_empty() {
                continue;
            }

            let body = words
                .iter()
                .map(|w| regex::escape(w))
                .collect::<Vec<_>>()
                .join(r"\s+");
            let pattern = Regex::new(&format!(r"\b{}\b", body))
                .with_context(|| format!("Invalid filler phrase: {:?}", entry))?;

            phrases.push(Phrase {
                text: words.join(" "),
                words,
                pattern,
            });
        }

        phrases.sort_by(|a, b| b.words.len().cmp(&a.words.len()));

        Ok(Self {
            phrases,
            words: config.words.iter().map(|w| w.to_lowercase()).collect(),
            counting: config.counting,
        })
    }

    pub fn counting(&self) -> FillerCounting {
        self.counting
    }

    /// Count fillers in `text` according to the configured counting mode
    pub fn count(&self, text: &NormalizedText) -> FillerReport {
        match self.counting {
            FillerCounting::Exclusive => self.count_exclusive(text),
            FillerCounting::Overlapping => self.count_overlapping(text),
        }
    }

    /// Scan tokens left to right; a phrase match swallows its tokens
    fn count_exclusive(&self, text: &NormalizedText) -> FillerReport {
        let tokens: Vec<&str> = text.tokens().collect();
        let mut report = FillerReport::default();
        let mut i = 0;

        while i < tokens.len() {
            if let Some(phrase) = self.phrases.iter().find(|p| p.matches_at(&tokens[i..])) {
                report.record(&phrase.text, true, 1);
                i += phrase.words.len();
                continue;
            }

            if self.words.contains(tokens[i]) {
                report.record(tokens[i], false, 1);
            }
            i += 1;
        }

        report
    }

    /// Search every phrase over the whole text, then count single tokens on top
    fn count_overlapping(&self, text: &NormalizedText) -> FillerReport {
        let mut report = FillerReport::default();

        for phrase in &self.phrases {
            let count = phrase.pattern.find_iter(text.as_str()).count();
            report.record(&phrase.text, true, count);
        }

        for token in text.tokens() {
            if self.words.contains(token) {
                report.record(token, false, 1);
            }
        }

        report
    }
}
