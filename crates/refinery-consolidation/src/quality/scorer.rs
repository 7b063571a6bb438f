//! Weighted multi-factor quality score.
//!
//! `clamp01(0.5 + 0.2·length + 0.3·technical + 0.2·relevance − 0.3·noise
//!          + 0.15·frequency + 0.15·structure)`
//!
//! Stopwords and blank names are pinned to 0.0 before any weighting.

use refinery_core::config::ScoringConfig;
use refinery_core::errors::ConfigError;
use refinery_core::Concept;

use super::patterns::ScoringPatterns;
use crate::algorithms::scripts;

const BASELINE: f64 = 0.5;
const W_LENGTH: f64 = 0.2;
const W_TECHNICAL: f64 = 0.3;
const W_RELEVANCE: f64 = 0.2;
const W_NOISE: f64 = 0.3;
const W_FREQUENCY: f64 = 0.15;
const W_STRUCTURE: f64 = 0.15;

/// Noise added per matched noise pattern.
const NOISE_PER_PATTERN: f64 = 0.5;
/// Symbol ratio above which a name counts as symbol-heavy.
const SYMBOL_RATIO_LIMIT: f64 = 0.3;
const SYMBOL_NOISE: f64 = 0.3;
/// Names this short in the low-information script are penalized.
const LOW_INFORMATION_MAX_CHARS: usize = 3;
const LOW_INFORMATION_NOISE: f64 = 0.4;

const MIXED_SCRIPT_BONUS: f64 = 0.4;
const CAMEL_CASE_BONUS: f64 = 0.3;
const SEPARATOR_BONUS: f64 = 0.2;
const LENGTH_BONUS_CAP: f64 = 0.1;

/// The shorter side of a term containment match needs at least this many chars.
const MIN_CONTAINMENT_CHARS: usize = 3;

/// Individual factors behind a score, for reporting and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub length: f64,
    pub technical: f64,
    pub relevance: f64,
    pub noise: f64,
    pub frequency: f64,
    pub structure: f64,
    /// The name was a stopword or blank, and the score pinned to 0.0.
    pub pinned: bool,
    pub total: f64,
}

/// Length factor by character count.
pub fn length_score(chars: usize) -> f64 {
    match chars {
        3..=20 => 1.0,
        2 | 21..=30 => 0.7,
        1 | 31.. => 0.2,
        _ => 0.5,
    }
}

/// Frequency factor. The bands overlap on purpose and are tested in order.
pub fn frequency_score(frequency: u64) -> f64 {
    if (3..=50).contains(&frequency) {
        1.0
    } else if (2..=100).contains(&frequency) {
        0.8
    } else if frequency == 1 {
        0.5
    } else {
        0.3
    }
}

/// Pure, deterministic concept scorer.
#[derive(Debug, Clone)]
pub struct QualityScorer {
    patterns: ScoringPatterns,
}

impl QualityScorer {
    pub fn new(config: &ScoringConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            patterns: ScoringPatterns::compile(config)?,
        })
    }

    pub fn patterns(&self) -> &ScoringPatterns {
        &self.patterns
    }

    /// Quality of `concept` in [0, 1].
    pub fn score(&self, concept: &Concept) -> f64 {
        self.breakdown(concept).total
    }

    /// Score `concept` and keep every factor.
    pub fn breakdown(&self, concept: &Concept) -> ScoreBreakdown {
        let name = concept.name.as_str();
        let chars = concept.name_len();
        let relevance = if concept.relevance.is_nan() {
            0.0
        } else {
            concept.relevance.clamp(0.0, 1.0)
        };

        let length = length_score(chars);
        let technical = self.technical_score(name);
        let noise = self.noise_score(name, chars);
        let frequency = frequency_score(concept.frequency);
        let structure = self.structure_score(name, chars);

        if self.is_pinned(name) {
            return ScoreBreakdown {
                length,
                technical,
                relevance,
                noise,
                frequency,
                structure,
                pinned: true,
                total: 0.0,
            };
        }

        let total = BASELINE + W_LENGTH * length + W_TECHNICAL * technical
            + W_RELEVANCE * relevance
            - W_NOISE * noise
            + W_FREQUENCY * frequency
            + W_STRUCTURE * structure;

        ScoreBreakdown {
            length,
            technical,
            relevance,
            noise,
            frequency,
            structure,
            pinned: false,
            total: total.clamp(0.0, 1.0),
        }
    }

    fn is_pinned(&self, name: &str) -> bool {
        let folded = name.trim().to_lowercase();
        folded.is_empty() || self.patterns.stopwords.contains(&folded)
    }

    /// Exact term → 1.0, term containment either way → 0.8, shape → 0.6.
    fn technical_score(&self, name: &str) -> f64 {
        let folded = name.trim().to_lowercase();
        if folded.is_empty() {
            return 0.0;
        }
        let terms = &self.patterns.technical_terms;
        if terms.iter().any(|t| *t == folded) {
            return 1.0;
        }
        let folded_chars = folded.chars().count();
        if terms.iter().any(|t| {
            let shorter = folded_chars.min(t.chars().count());
            shorter >= MIN_CONTAINMENT_CHARS
                && (folded.contains(t.as_str()) || t.contains(folded.as_str()))
        }) {
            return 0.8;
        }
        if self
            .patterns
            .technical_patterns
            .iter()
            .any(|re| re.is_match(name))
        {
            return 0.6;
        }
        0.0
    }

    fn noise_score(&self, name: &str, chars: usize) -> f64 {
        let mut noise = self
            .patterns
            .noise_patterns
            .iter()
            .filter(|re| re.is_match(name))
            .count() as f64
            * NOISE_PER_PATTERN;

        if chars > 0 {
            let symbols = name
                .chars()
                .filter(|c| !(c.is_alphanumeric() || *c == '_' || c.is_whitespace()))
                .count();
            if symbols as f64 / chars as f64 > SYMBOL_RATIO_LIMIT {
                noise += SYMBOL_NOISE;
            }
        }

        if chars <= LOW_INFORMATION_MAX_CHARS && self.patterns.low_information_script.is_match(name)
        {
            noise += LOW_INFORMATION_NOISE;
        }

        noise.min(1.0)
    }

    fn structure_score(&self, name: &str, chars: usize) -> f64 {
        let mut structure = 0.0;
        if scripts::mixes_scripts(name) {
            structure += MIXED_SCRIPT_BONUS;
        }
        if self
            .patterns
            .camel_case_patterns
            .iter()
            .any(|re| re.is_match(name))
        {
            structure += CAMEL_CASE_BONUS;
        }
        if name.contains('-') || name.contains('.') {
            structure += SEPARATOR_BONUS;
        }
        structure += LENGTH_BONUS_CAP.min(chars as f64 / 50.0);
        structure.min(1.0)
    }
}
