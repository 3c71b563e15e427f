//! Lexical diversity estimator.
//!
//! Scores the vocabulary richness of a text sample with the Guiraud index
//! and rates it Low / Medium / High. Pure and infallible; short or empty
//! samples are a valid outcome, not an error.

pub mod estimator;
pub mod model;
pub mod tokenize;

pub use estimator::{analyze, diversity, diversity_with, guiraud, rate};
pub use model::{DiversityAnalysis, DiversityRating, DiversityResult};
pub use tokenize::{strip_markup, tokenize};
