//! # refinery-reclassification
//!
//! Reassigns concept categories by ordered rule matching.
//! Rule-sets are tested in order against the concept name; the first rule-set
//! with a matching pattern overwrites the category. Unmatched concepts keep theirs.

pub mod engine;
pub mod rules;

pub use engine::{Recategorizer, RecategorizationSummary};
pub use rules::{compile_rules, CategoryRule};
