use serde::{Deserialize, Serialize};

use super::tables;

fn owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Declarative scoring tables. Patterns are regex sources, compiled once
/// when the refiner is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Curated technical terms, matched case-insensitively.
    pub technical_terms: Vec<String>,
    /// Technical suffix, acronym, and compound shapes.
    pub technical_patterns: Vec<String>,
    /// Each match adds 0.5 to the noise score.
    pub noise_patterns: Vec<String>,
    /// Exact (case-folded) names pinned to a zero score.
    pub stopwords: Vec<String>,
    /// Script that carries little information on its own when short.
    pub low_information_script: String,
    /// Camel-case and acronym shapes.
    pub camel_case_patterns: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            technical_terms: owned(tables::TECHNICAL_TERMS),
            technical_patterns: owned(tables::TECHNICAL_PATTERNS),
            noise_patterns: owned(tables::NOISE_PATTERNS),
            stopwords: owned(tables::STOPWORDS),
            low_information_script: tables::LOW_INFORMATION_SCRIPT.to_string(),
            camel_case_patterns: owned(tables::CAMEL_CASE_PATTERNS),
        }
    }
}
