use serde::{Deserialize, Serialize};

use super::TierDistribution;

/// Statistics for one refinement run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementStats {
    /// Records across both input partitions.
    pub original_count: usize,
    /// Duplicate clusters found (each collapsed to one record).
    pub merged_groups: usize,
    /// Records absorbed into another by merging.
    pub absorbed_concepts: usize,
    /// Records dropped by the quality filter.
    pub removed_concepts: usize,
    /// Dropped records that also fell below the noise floor.
    pub noise_removed: usize,
    pub final_count: usize,
    pub surface_count: usize,
    pub deep_count: usize,
    /// `(removed + merged_groups) / original * 100`, or 0 for an empty input.
    pub improvement_ratio: f64,
    pub tier_distribution: TierDistribution,
}

impl ImprovementStats {
    pub fn improvement_ratio(original: usize, removed: usize, merged_groups: usize) -> f64 {
        if original == 0 {
            0.0
        } else {
            (removed + merged_groups) as f64 / original as f64 * 100.0
        }
    }
}
