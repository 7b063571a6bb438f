use serde::{Deserialize, Serialize};

use super::{ConceptDatabase, ImprovementStats};

/// A refined database together with the statistics describing how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefinementOutcome {
    pub database: ConceptDatabase,
    pub stats: ImprovementStats,
}
