pub mod sentiment;
pub mod tagger;

pub use sentiment::*;
pub use tagger::*;

use std::sync::Arc;

use anyhow::Result;

use crate::models::{SentimentScores, TaggedToken};

/// Assigns a part of speech to every token of a text
pub trait PosTagger {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>>;
}

/// Scores the emotional polarity of a text
pub trait SentimentScorer {
    fn score(&self, text: &str) -> Result<SentimentScores>;
}

impl<T: PosTagger + ?Sized> PosTagger for &T {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tag(text)
    }
}

impl<T: PosTagger + ?Sized> PosTagger for Box<T> {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tag(text)
    }
}

impl<T: PosTagger + ?Sized> PosTagger for Arc<T> {
    fn tag(&self, text: &str) -> Result<Vec<TaggedToken>> {
        (**self).tag(text)
    }
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for &S {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        (**self).score(text)
    }
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for Box<S> {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        (**self).score(text)
    }
}

impl<S: SentimentScorer + ?Sized> SentimentScorer for Arc<S> {
    fn score(&self, text: &str) -> Result<SentimentScores> {
        (**self).score(text)
    }
}
