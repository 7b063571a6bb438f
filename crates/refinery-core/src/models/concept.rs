use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::constants::{DEFAULT_CATEGORY, DEFAULT_FREQUENCY};

fn default_frequency() -> u64 {
    DEFAULT_FREQUENCY
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Treat an explicit `null` the same as an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Null or missing category falls back to the default label.
fn category_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

/// Accepts integers and whole-number floats. Null, negative, fractional, and
/// non-numeric values fall back to the default frequency.
fn lenient_frequency<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(frequency_from_value)
        .unwrap_or(DEFAULT_FREQUENCY))
}

fn frequency_from_value(value: &serde_json::Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    let f = value.as_f64()?;
    (f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

/// A candidate concept harvested by the upstream extractor.
///
/// `quality_score` is derived: it can always be recomputed from the other
/// fields and is never an independent source of truth.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Concept {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default = "default_frequency", deserialize_with = "lenient_frequency")]
    pub frequency: u64,
    #[serde(default, alias = "confidence", deserialize_with = "null_as_default")]
    pub relevance: f64,
    #[serde(default = "default_category", deserialize_with = "category_or_default")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub related_concepts: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    /// Names absorbed by a merge, in cluster order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub merged_from: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_merged: Option<DateTime<Utc>>,
    /// Extractor fields the refinery does not interpret, carried through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for Concept {
    fn default() -> Self {
        Self {
            name: String::new(),
            frequency: DEFAULT_FREQUENCY,
            relevance: 0.0,
            category: default_category(),
            related_concepts: Vec::new(),
            quality_score: None,
            merged_from: Vec::new(),
            last_merged: None,
            extra: BTreeMap::new(),
        }
    }
}

impl Concept {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_frequency(mut self, frequency: u64) -> Self {
        self.frequency = frequency;
        self
    }

    pub fn with_relevance(mut self, relevance: f64) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set related concepts, dropping repeats while keeping first-occurrence order.
    pub fn with_related<I, S>(mut self, related: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        self.related_concepts = related
            .into_iter()
            .map(Into::into)
            .filter(|r: &String| seen.insert(r.clone()))
            .collect();
        self
    }

    /// Length of the name in characters, not bytes.
    pub fn name_len(&self) -> usize {
        self.name.chars().count()
    }

    /// True if this record was produced by a merge.
    pub fn is_merged(&self) -> bool {
        !self.merged_from.is_empty()
    }
}
