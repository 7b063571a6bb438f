pub mod category_config;
pub mod defaults;
pub mod grouping_config;
pub mod merge_config;
pub mod partition_config;
pub mod scoring_config;
pub mod tables;
pub mod threshold_config;

pub use category_config::{default_category_rules, CategoryRuleConfig};
pub use grouping_config::{GroupingConfig, GroupingStrategy};
pub use merge_config::MergeConfig;
pub use partition_config::PartitionConfig;
pub use scoring_config::ScoringConfig;
pub use threshold_config::ThresholdConfig;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level refiner configuration, aggregating every tunable the pipeline consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinerConfig {
    pub thresholds: ThresholdConfig,
    pub grouping: GroupingConfig,
    pub merge: MergeConfig,
    pub partition: PartitionConfig,
    pub scoring: ScoringConfig,
    pub categories: Vec<CategoryRuleConfig>,
}

impl Default for RefinerConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
            grouping: GroupingConfig::default(),
            merge: MergeConfig::default(),
            partition: PartitionConfig::default(),
            scoring: ScoringConfig::default(),
            categories: default_category_rules(),
        }
    }
}

impl RefinerConfig {
    /// Load config from a TOML string. Missing sections fall back to defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the numeric invariants. Pattern sources are checked when compiled.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        for (index, rule) in self.categories.iter().enumerate() {
            if rule.category.trim().is_empty() {
                return Err(ConfigError::EmptyCategory { index });
            }
        }
        Ok(())
    }
}
