mod config_error;
mod refinery_error;
mod storage_error;

pub use config_error::ConfigError;
pub use refinery_error::{RefineryError, RefineryResult};
pub use storage_error::StorageError;
