use serde::{Deserialize, Serialize};

use super::defaults;

/// Surface/deep repartition configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
    /// Categories that always land in the surface partition.
    pub surface_categories: Vec<String>,
}

impl Default for PartitionConfig {
    fn default() -> Self {
        Self {
            surface_categories: defaults::DEFAULT_SURFACE_CATEGORIES
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}
