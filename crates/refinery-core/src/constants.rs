/// Refinery version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Category assigned to concepts the extractor did not label.
pub const DEFAULT_CATEGORY: &str = "general";

/// Frequency assumed for concepts the extractor did not count.
pub const DEFAULT_FREQUENCY: u64 = 1;
