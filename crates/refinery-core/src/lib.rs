//! # refinery-core
//!
//! Foundation crate for the concept refinery.
//! Defines the concept data model, configuration and rule tables, errors, and
//! collaborator traits. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RefinerConfig;
pub use errors::{ConfigError, RefineryError, RefineryResult, StorageError};
pub use models::{
    Concept, ConceptDatabase, ImprovementStats, QualityTier, RefinementOutcome, TierDistribution,
};
