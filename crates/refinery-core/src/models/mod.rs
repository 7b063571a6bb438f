mod concept;
mod database;
mod outcome;
mod quality_tier;
mod stats;

pub use concept::Concept;
pub use database::ConceptDatabase;
pub use outcome::RefinementOutcome;
pub use quality_tier::{QualityTier, TierDistribution};
pub use stats::ImprovementStats;
