//! Name-level algorithms: fuzzy similarity, edit distance, script detection.

pub mod scripts;
pub mod similarity;

pub use similarity::{edit_distance, similarity};
