//! Concept quality scoring.

pub mod patterns;
pub mod scorer;

pub use patterns::ScoringPatterns;
pub use scorer::{frequency_score, length_score, QualityScorer, ScoreBreakdown};
