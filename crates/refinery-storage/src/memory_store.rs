//! InMemoryStore: a mutex-guarded snapshot, for tests and embedding callers.

use std::sync::Mutex;

use refinery_core::errors::{RefineryResult, StorageError};
use refinery_core::traits::IConceptStore;
use refinery_core::ConceptDatabase;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    database: Mutex<ConceptDatabase>,
}

impl InMemoryStore {
    pub fn new(database: ConceptDatabase) -> Self {
        Self {
            database: Mutex::new(database),
        }
    }
}

impl IConceptStore for InMemoryStore {
    fn load(&self) -> RefineryResult<ConceptDatabase> {
        let guard = self
            .database
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        Ok(guard.clone())
    }

    fn save(&self, database: &ConceptDatabase) -> RefineryResult<()> {
        let mut guard = self
            .database
            .lock()
            .map_err(|_| StorageError::LockPoisoned)?;
        *guard = database.clone();
        Ok(())
    }
}
