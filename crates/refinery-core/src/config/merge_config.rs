use serde::{Deserialize, Serialize};

use super::defaults;

/// Merge configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Cap on the related-concept union carried by a merged record.
    pub max_related_concepts: usize,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_related_concepts: defaults::DEFAULT_MAX_RELATED_CONCEPTS,
        }
    }
}
