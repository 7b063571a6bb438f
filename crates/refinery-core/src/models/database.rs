use serde::{Deserialize, Serialize};

use super::Concept;

/// The two named partitions of a concept database.
///
/// Refinement never mutates a database value; it always builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConceptDatabase {
    pub surface: Vec<Concept>,
    pub deep: Vec<Concept>,
}

impl ConceptDatabase {
    pub fn new(surface: Vec<Concept>, deep: Vec<Concept>) -> Self {
        Self { surface, deep }
    }

    /// Total records across both partitions.
    pub fn len(&self) -> usize {
        self.surface.len() + self.deep.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surface.is_empty() && self.deep.is_empty()
    }

    /// Surface records, then deep records, each in stored order.
    pub fn iter(&self) -> impl Iterator<Item = &Concept> {
        self.surface.iter().chain(self.deep.iter())
    }
}
