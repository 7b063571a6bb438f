//! Phase 6: Split survivors into surface and deep.
//!
//! Surface: category in the surface set, or quality at least `good`.

use refinery_core::config::{PartitionConfig, ThresholdConfig};
use refinery_core::{Concept, ConceptDatabase};

pub fn belongs_on_surface(
    concept: &Concept,
    partition: &PartitionConfig,
    thresholds: &ThresholdConfig,
) -> bool {
    partition
        .surface_categories
        .iter()
        .any(|c| *c == concept.category)
        || concept.quality_score.unwrap_or(0.0) >= thresholds.good
}

/// Build a new database, preserving relative order within each partition.
pub fn partition(
    concepts: Vec<Concept>,
    partition: &PartitionConfig,
    thresholds: &ThresholdConfig,
) -> ConceptDatabase {
    let (surface, deep) = concepts
        .into_iter()
        .partition(|c| belongs_on_surface(c, partition, thresholds));
    ConceptDatabase::new(surface, deep)
}
