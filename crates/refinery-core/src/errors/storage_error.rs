/// Persistence-layer errors for concept stores.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },

    #[error("store lock poisoned")]
    LockPoisoned,
}
