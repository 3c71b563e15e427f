//! Lexical diversity output types.

use serde::{Deserialize, Serialize};

/// Qualitative vocabulary-richness rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiversityRating {
    Low,
    Medium,
    High,
}

impl DiversityRating {
    pub fn label(&self) -> &'static str {
        match self {
            DiversityRating::Low => "Low",
            DiversityRating::Medium => "Medium",
            DiversityRating::High => "High",
        }
    }
}

impl std::fmt::Display for DiversityRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Guiraud score and its rating.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiversityResult {
    pub score: f64,
    pub rating: DiversityRating,
}

impl DiversityResult {
    /// The result for text too short to measure
    pub const fn insufficient() -> Self {
        Self {
            score: 0.0,
            rating: DiversityRating::Low,
        }
    }
}

/// A [`DiversityResult`] together with the token counts it was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DiversityAnalysis {
    #[serde(flatten)]
    pub result: DiversityResult,
    pub total_tokens: usize,
    pub unique_tokens: usize,
}
