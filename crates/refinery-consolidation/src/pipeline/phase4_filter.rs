//! Phase 4: Drop records below the acceptable quality tier.

use refinery_core::config::ThresholdConfig;
use refinery_core::Concept;

/// Survivors plus counts of what was dropped.
#[derive(Debug, Clone, Default)]
pub struct FilterResult {
    pub kept: Vec<Concept>,
    pub removed: usize,
    /// Removed records that also sat below the noise floor.
    pub noise: usize,
}

/// Keep records scoring at least `thresholds.acceptable`. Unscored records count as 0.0.
pub fn filter_by_quality(concepts: Vec<Concept>, thresholds: &ThresholdConfig) -> FilterResult {
    let mut result = FilterResult::default();
    for concept in concepts {
        let score = concept.quality_score.unwrap_or(0.0);
        if score >= thresholds.acceptable {
            result.kept.push(concept);
        } else {
            result.removed += 1;
            if score < thresholds.poor {
                result.noise += 1;
            }
        }
    }
    result
}
