//! Refinement pipeline orchestrator.
//!
//! Phase 1: Scoring → Phase 2: Grouping → Phase 3: Merge → Phase 4: Filter →
//! Phase 5: Recategorization → Phase 6: Partition
//!
//! Single pass, no retries. Each phase's output is the next phase's only input.

pub mod phase1_scoring;
pub mod phase2_grouping;
pub mod phase3_merge;
pub mod phase4_filter;
pub mod phase5_recategorization;
pub mod phase6_partition;

use chrono::{DateTime, Utc};
use refinery_core::config::RefinerConfig;
use refinery_core::{
    Concept, ConceptDatabase, ImprovementStats, QualityTier, RefinementOutcome, TierDistribution,
};
use refinery_observability::events;
use refinery_reclassification::Recategorizer;
use tracing::info;

use crate::quality::QualityScorer;

/// Run the full pipeline over `database`, stamping merges with `now`.
pub fn run_pipeline(
    database: &ConceptDatabase,
    config: &RefinerConfig,
    scorer: &QualityScorer,
    recategorizer: &Recategorizer,
    now: DateTime<Utc>,
) -> RefinementOutcome {
    let working: Vec<Concept> = database.iter().cloned().collect();
    let original_count = working.len();

    if working.is_empty() {
        info!("refinement skipped: empty database");
        return RefinementOutcome {
            database: ConceptDatabase::default(),
            stats: ImprovementStats::default(),
        };
    }

    // Phase 1: Scoring.
    let scored = phase1_scoring::score_all(&working, scorer);
    info!(count = scored.len(), "Phase 1: scored concepts");

    // Phase 2: Grouping.
    let grouping = phase2_grouping::group_duplicates(
        &scored,
        config.thresholds.similar,
        config.grouping.strategy,
    );
    info!(
        clusters = grouping.clusters.len(),
        singletons = grouping.singletons.len(),
        "Phase 2: grouping complete"
    );

    // Phase 3: Merge. Representatives take their leader's slot; absorbed
    // members leave theirs empty; singletons keep their scored instance.
    let mut slots: Vec<Option<Concept>> = scored.into_iter().map(Some).collect();
    for cluster in &grouping.clusters {
        let members: Vec<Concept> = cluster.iter().filter_map(|&i| slots[i].take()).collect();
        let member_refs: Vec<&Concept> = members.iter().collect();
        if let Some(merged) = phase3_merge::merge_cluster(
            &member_refs,
            scorer,
            config.merge.max_related_concepts,
            now,
        ) {
            events::concepts_merged(&merged.name, members.len(), merged.frequency);
            slots[cluster[0]] = Some(merged);
        }
    }
    let assembled: Vec<Concept> = slots.into_iter().flatten().collect();
    info!(
        merged = grouping.clusters.len(),
        working = assembled.len(),
        "Phase 3: merge complete"
    );

    // Phase 4: Filter.
    let filtered = phase4_filter::filter_by_quality(assembled, &config.thresholds);
    events::concepts_filtered(filtered.removed, filtered.noise, config.thresholds.acceptable);

    // Phase 5: Recategorization.
    let (recategorized, _) =
        phase5_recategorization::recategorize_survivors(&filtered.kept, recategorizer);

    let tier_distribution = tier_distribution(&recategorized, config);
    let final_count = recategorized.len();

    // Phase 6: Partition.
    let refined =
        phase6_partition::partition(recategorized, &config.partition, &config.thresholds);
    info!(
        surface = refined.surface.len(),
        deep = refined.deep.len(),
        "Phase 6: partition complete"
    );

    let stats = ImprovementStats {
        original_count,
        merged_groups: grouping.clusters.len(),
        absorbed_concepts: grouping.absorbed(),
        removed_concepts: filtered.removed,
        noise_removed: filtered.noise,
        final_count,
        surface_count: refined.surface.len(),
        deep_count: refined.deep.len(),
        improvement_ratio: ImprovementStats::improvement_ratio(
            original_count,
            filtered.removed,
            grouping.clusters.len(),
        ),
        tier_distribution,
    };

    events::refinement_completed(
        stats.original_count,
        stats.merged_groups,
        stats.removed_concepts,
        stats.final_count,
        stats.improvement_ratio,
    );

    RefinementOutcome {
        database: refined,
        stats,
    }
}

fn tier_distribution(concepts: &[Concept], config: &RefinerConfig) -> TierDistribution {
    let mut distribution = TierDistribution::default();
    for concept in concepts {
        distribution.record(QualityTier::classify(
            concept.quality_score.unwrap_or(0.0),
            &config.thresholds,
        ));
    }
    distribution
}
