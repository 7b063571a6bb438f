use super::{ConfigError, StorageError};

/// Top-level error for every fallible refinery operation.
///
/// Malformed concept records and empty databases are not errors; they flow
/// through the pipeline and are handled by the quality gate.
#[derive(Debug, thiserror::Error)]
pub enum RefineryError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),
}

pub type RefineryResult<T> = Result<T, RefineryError>;
