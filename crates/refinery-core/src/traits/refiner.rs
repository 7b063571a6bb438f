use crate::models::{ConceptDatabase, RefinementOutcome};

/// Batch refinement of a concept database into a deduplicated, filtered,
/// recategorized snapshot.
pub trait IConceptRefiner: Send + Sync {
    /// Refine `database`. The input is never mutated.
    fn improve(&self, database: &ConceptDatabase) -> RefinementOutcome;
}
