//! Recommendations derived solely from run statistics.
//!
//! Examples: "merged 3 duplicate groups", "removed 5 low-quality concepts".

use refinery_core::ImprovementStats;

/// Share of the input that was duplicate or noise, above which extraction is suspect.
const HIGH_IMPROVEMENT_RATIO: f64 = 30.0;

/// Generate recommendation strings from `stats`. No new analysis is performed.
pub fn recommendations(stats: &ImprovementStats) -> Vec<String> {
    if stats.original_count == 0 {
        return vec!["concept database is empty; run extraction before refinement".into()];
    }

    let mut recs = Vec::new();

    if stats.merged_groups > 0 {
        recs.push(format!(
            "merged {} duplicate groups ({} concepts absorbed)",
            stats.merged_groups, stats.absorbed_concepts
        ));
    }

    if stats.removed_concepts > 0 {
        if stats.noise_removed > 0 {
            recs.push(format!(
                "removed {} low-quality concepts ({} below the noise floor)",
                stats.removed_concepts, stats.noise_removed
            ));
        } else {
            recs.push(format!(
                "removed {} low-quality concepts",
                stats.removed_concepts
            ));
        }
    }

    if stats.improvement_ratio > HIGH_IMPROVEMENT_RATIO {
        recs.push(format!(
            "{:.1}% of extracted concepts were duplicates or noise; consider tightening extraction",
            stats.improvement_ratio
        ));
    }

    if stats.final_count == 0 {
        recs.push("no concepts survived refinement; review the quality thresholds".into());
    } else if stats.tier_distribution.good + stats.tier_distribution.excellent == 0 {
        recs.push("no good or excellent concepts remain; review the technical term table".into());
    }

    if recs.is_empty() {
        recs.push("concept database is already clean".into());
    }

    recs
}
