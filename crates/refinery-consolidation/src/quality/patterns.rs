//! Compiled scoring tables.

use std::collections::HashSet;

use refinery_core::config::ScoringConfig;
use refinery_core::errors::ConfigError;
use regex::Regex;

/// Scoring tables compiled from a [`ScoringConfig`].
#[derive(Debug, Clone)]
pub struct ScoringPatterns {
    /// Case-folded curated terms.
    pub technical_terms: Vec<String>,
    pub technical_patterns: Vec<Regex>,
    pub noise_patterns: Vec<Regex>,
    /// Case-folded, trimmed stopwords.
    pub stopwords: HashSet<String>,
    pub low_information_script: Regex,
    pub camel_case_patterns: Vec<Regex>,
}

impl ScoringPatterns {
    /// Compile every table. The first unparsable pattern aborts construction.
    pub fn compile(config: &ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            technical_terms: config
                .technical_terms
                .iter()
                .map(|t| t.trim().to_lowercase())
                .filter(|t| !t.is_empty())
                .collect(),
            technical_patterns: compile_table("technical_patterns", &config.technical_patterns)?,
            noise_patterns: compile_table("noise_patterns", &config.noise_patterns)?,
            stopwords: config
                .stopwords
                .iter()
                .map(|s| s.trim().to_lowercase())
                .collect(),
            low_information_script: compile_one(
                "low_information_script",
                &config.low_information_script,
            )?,
            camel_case_patterns: compile_table("camel_case_patterns", &config.camel_case_patterns)?,
        })
    }
}

fn compile_one(table: &str, source: &str) -> Result<Regex, ConfigError> {
    Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
        table: table.to_string(),
        pattern: source.to_string(),
        reason: e.to_string(),
    })
}

fn compile_table(table: &str, sources: &[String]) -> Result<Vec<Regex>, ConfigError> {
    sources.iter().map(|s| compile_one(table, s)).collect()
}
