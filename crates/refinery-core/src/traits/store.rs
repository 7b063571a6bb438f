use crate::errors::RefineryResult;
use crate::models::ConceptDatabase;

/// Durable home of a concept database between refinement runs.
pub trait IConceptStore: Send + Sync {
    /// Load the current snapshot. A store with nothing saved yields an empty database.
    fn load(&self) -> RefineryResult<ConceptDatabase>;

    /// Replace the stored snapshot with `database`.
    fn save(&self, database: &ConceptDatabase) -> RefineryResult<()>;
}
