// Single source of truth for all default values.

// --- Thresholds ---
pub const DEFAULT_SIMILAR_THRESHOLD: f64 = 0.85;
pub const DEFAULT_POOR_THRESHOLD: f64 = 0.2;
pub const DEFAULT_ACCEPTABLE_THRESHOLD: f64 = 0.4;
pub const DEFAULT_GOOD_THRESHOLD: f64 = 0.6;
pub const DEFAULT_EXCELLENT_THRESHOLD: f64 = 0.8;

// --- Merge ---
pub const DEFAULT_MAX_RELATED_CONCEPTS: usize = 10;

// --- Partition ---
pub const DEFAULT_SURFACE_CATEGORIES: &[&str] = &["technology", "programming"];
