use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Similarity and quality-tier thresholds.
///
/// A score below `acceptable` is poor, and a score below `poor` is noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Minimum similarity for two names to be grouped as duplicates.
    pub similar: f64,
    /// Noise floor. Filtered concepts below it are reported as noise.
    pub poor: f64,
    /// Minimum quality a concept needs to survive filtering.
    pub acceptable: f64,
    /// Minimum quality that sends a concept to the surface partition.
    pub good: f64,
    pub excellent: f64,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            similar: defaults::DEFAULT_SIMILAR_THRESHOLD,
            poor: defaults::DEFAULT_POOR_THRESHOLD,
            acceptable: defaults::DEFAULT_ACCEPTABLE_THRESHOLD,
            good: defaults::DEFAULT_GOOD_THRESHOLD,
            excellent: defaults::DEFAULT_EXCELLENT_THRESHOLD,
        }
    }
}

impl ThresholdConfig {
    /// Reject thresholds outside [0, 1] (NaN included) and non-ascending tiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("similar", self.similar),
            ("poor", self.poor),
            ("acceptable", self.acceptable),
            ("good", self.good),
            ("excellent", self.excellent),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange {
                    name: name.to_string(),
                    value,
                });
            }
        }

        if !(self.poor < self.acceptable && self.acceptable < self.good && self.good < self.excellent)
        {
            return Err(ConfigError::TiersNotAscending {
                poor: self.poor,
                acceptable: self.acceptable,
                good: self.good,
                excellent: self.excellent,
            });
        }

        Ok(())
    }
}
