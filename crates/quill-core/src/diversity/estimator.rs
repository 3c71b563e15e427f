//! Guiraud lexical diversity.
//!
//! `score = unique tokens / sqrt(total tokens)`, rated against two
//! thresholds. Short samples are not scored at all: below the minimum token
//! count the result is a flat `{ score: 0, rating: Low }`.

use crate::config::DiversityConfig;
use crate::diversity::model::{DiversityAnalysis, DiversityRating, DiversityResult};
use crate::diversity::tokenize::tokenize;
use std::collections::HashSet;

/// Score a text with the default thresholds.
///
/// ```
/// use quill_core::diversity::{diversity, DiversityRating};
///
/// let result = diversity("too short to measure");
/// assert_eq!(result.score, 0.0);
/// assert_eq!(result.rating, DiversityRating::Low);
/// ```
pub fn diversity(text: &str) -> DiversityResult {
    diversity_with(text, &DiversityConfig::default())
}

/// Score a text with explicit thresholds.
pub fn diversity_with(text: &str, config: &DiversityConfig) -> DiversityResult {
    analyze(text, config).result
}

/// Score a text and report the token counts behind the score.
pub fn analyze(text: &str, config: &DiversityConfig) -> DiversityAnalysis {
    if text.trim().is_empty() {
        return DiversityAnalysis {
            result: DiversityResult::insufficient(),
            total_tokens: 0,
            unique_tokens: 0,
        };
    }

    let tokens = tokenize(text);
    let total_tokens = tokens.len();
    let unique_tokens = tokens.iter().collect::<HashSet<_>>().len();

    let result = if total_tokens < config.min_tokens {
        DiversityResult::insufficient()
    } else {
        let score = guiraud(unique_tokens, total_tokens);
        DiversityResult {
            score,
            rating: rate(score, config),
        }
    };

    tracing::debug!(
        total_tokens,
        unique_tokens,
        score = result.score,
        rating = result.rating.label(),
        "lexical diversity estimated"
    );

    DiversityAnalysis {
        result,
        total_tokens,
        unique_tokens,
    }
}

/// Unique-token count over the square root of the total token count.
///
/// Zero total tokens score zero.
pub fn guiraud(unique_tokens: usize, total_tokens: usize) -> f64 {
    if total_tokens == 0 {
        return 0.0;
    }
    unique_tokens as f64 / (total_tokens as f64).sqrt()
}

/// `score > high_above` is High, `score > medium_above` is Medium, else Low.
pub fn rate(score: f64, config: &DiversityConfig) -> DiversityRating {
    if score > config.high_above {
        DiversityRating::High
    } else if score > config.medium_above {
        DiversityRating::Medium
    } else {
        DiversityRating::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `total` tokens drawn round-robin from `unique` distinct words.
    fn sample(total: usize, unique: usize) -> String {
        (0..total)
            .map(|i| format!("w{}", i % unique))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_empty_and_whitespace_are_insufficient() {
        assert_eq!(diversity(""), DiversityResult::insufficient());
        assert_eq!(diversity("  \n\t "), DiversityResult::insufficient());
    }

    #[test]
    fn test_below_minimum_is_insufficient() {
        let analysis = analyze(&sample(24, 24), &DiversityConfig::default());
        assert_eq!(analysis.result, DiversityResult::insufficient());
        assert_eq!(analysis.total_tokens, 24);
        assert_eq!(analysis.unique_tokens, 24);
    }

    #[test]
    fn test_exactly_minimum_is_scored() {
        let result = diversity(&sample(25, 25));
        assert_eq!(result.score, 5.0);
        assert_eq!(result.rating, DiversityRating::Low);
    }

    #[test]
    fn test_rate_boundaries() {
        let config = DiversityConfig::default();
        assert_eq!(rate(15.0, &config), DiversityRating::Low);
        assert_eq!(rate(15.000001, &config), DiversityRating::Medium);
        assert_eq!(rate(25.0, &config), DiversityRating::Medium);
        assert_eq!(rate(25.000001, &config), DiversityRating::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let config = DiversityConfig {
            min_tokens: 4,
            medium_above: 1.0,
            high_above: 1.5,
        };
        // 4 tokens, 4 unique: 4 / 2 = 2.0
        let result = diversity_with("one two three four", &config);
        assert_eq!(result.score, 2.0);
        assert_eq!(result.rating, DiversityRating::High);
    }

    #[test]
    fn test_guiraud_zero_tokens() {
        assert_eq!(guiraud(0, 0), 0.0);
    }

    #[test]
    fn test_markup_only_text_is_insufficient() {
        assert_eq!(
            diversity("<p></p><br/><div class=\"x\"></div>"),
            DiversityResult::insufficient()
        );
    }
}
