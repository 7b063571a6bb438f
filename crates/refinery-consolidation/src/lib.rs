//! # refinery-consolidation
//!
//! Concept refinement pipeline: scoring → fuzzy duplicate grouping → merge →
//! quality filter → recategorization → surface/deep partition.
//! Pure, synchronous batch transform over an immutable database snapshot.

pub mod algorithms;
pub mod engine;
pub mod monitoring;
pub mod pipeline;
pub mod quality;

pub use algorithms::{edit_distance, similarity};
pub use engine::ConceptRefiner;
pub use monitoring::{recommendations, render_report};
pub use pipeline::phase2_grouping::{group_duplicates, GroupingResult};
pub use pipeline::phase3_merge::merge_cluster;
pub use pipeline::phase4_filter::{filter_by_quality, FilterResult};
pub use pipeline::phase6_partition::partition;
pub use quality::{QualityScorer, ScoreBreakdown};
