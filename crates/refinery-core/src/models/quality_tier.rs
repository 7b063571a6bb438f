use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

/// Four-level quality scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    Poor,
    Acceptable,
    Good,
    Excellent,
}

impl QualityTier {
    pub fn classify(score: f64, thresholds: &ThresholdConfig) -> Self {
        if score >= thresholds.excellent {
            Self::Excellent
        } else if score >= thresholds.good {
            Self::Good
        } else if score >= thresholds.acceptable {
            Self::Acceptable
        } else {
            Self::Poor
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Poor => "poor",
            Self::Acceptable => "acceptable",
            Self::Good => "good",
            Self::Excellent => "excellent",
        }
    }
}

/// Count of concepts per quality tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierDistribution {
    pub poor: usize,
    pub acceptable: usize,
    pub good: usize,
    pub excellent: usize,
}

impl TierDistribution {
    pub fn record(&mut self, tier: QualityTier) {
        match tier {
            QualityTier::Poor => self.poor += 1,
            QualityTier::Acceptable => self.acceptable += 1,
            QualityTier::Good => self.good += 1,
            QualityTier::Excellent => self.excellent += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.poor + self.acceptable + self.good + self.excellent
    }
}
