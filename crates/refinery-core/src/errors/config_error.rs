/// Configuration errors. Raised at construction time, never mid-run.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("threshold {name} = {value} is outside [0, 1]")]
    ThresholdOutOfRange { name: String, value: f64 },

    #[error(
        "quality tiers must ascend strictly: poor {poor} < acceptable {acceptable} < good {good} < excellent {excellent}"
    )]
    TiersNotAscending {
        poor: f64,
        acceptable: f64,
        good: f64,
        excellent: f64,
    },

    #[error("invalid pattern in {table}: {pattern:?}: {reason}")]
    InvalidPattern {
        table: String,
        pattern: String,
        reason: String,
    },

    #[error("category rule-set {index} has an empty category label")]
    EmptyCategory { index: usize },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
