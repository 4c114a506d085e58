pub mod fillers;

pub use fillers::*;

use serde::{Deserialize, Serialize};

/// How phrase matches and single-word matches interact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillerCounting {
    /// A phrase match consumes its words; they are not counted again on their own
    #[default]
    Exclusive,
    /// Phrases and single words are counted independently, so "so yeah"
    /// counts once as a phrase and once more for "so"
    Overlapping,
}

/// Filler vocabularies
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FillerConfig {
    /// Whole-word phrases, words separated by single spaces
    pub phrases: Vec<String>,
    /// Single filler tokens, matched exactly
    pub words: Vec<String>,
    pub counting: FillerCounting,
}

impl Default for FillerConfig {
    fn default() -> Self {
        Self {
            phrases: vec![
                "you know".to_string(),
                "i mean".to_string(),
                "kind of".to_string(),
                "sort of".to_string(),
                "so yeah".to_string(),
                "kinda".to_string(),
                "sorta".to_string(),
            ],
            words: vec![
                "um".to_string(),
                "uh".to_string(),
                "like".to_string(),
                "huh".to_string(),
                "ah".to_string(),
                "so".to_string(),
                "well".to_string(),
                "right".to_string(),
                "actually".to_string(),
                "basically".to_string(),
                "literally".to_string(),
            ],
            counting: FillerCounting::Exclusive,
        }
    }
}
