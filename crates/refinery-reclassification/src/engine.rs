//! Recategorizer: applies the ordered rule-sets to a batch of concepts.

use refinery_core::config::CategoryRuleConfig;
use refinery_core::errors::ConfigError;
use refinery_core::Concept;
use tracing::debug;

use crate::rules::{self, CategoryRule};

/// Counts from one recategorization pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecategorizationSummary {
    /// Concepts whose category label actually changed.
    pub changed: usize,
    /// Concepts no rule-set matched.
    pub unmatched: usize,
}

/// Engine that reassigns concept categories.
#[derive(Debug, Clone)]
pub struct Recategorizer {
    rules: Vec<CategoryRule>,
}

impl Recategorizer {
    /// Build from rule-set configs. Fails fast on any unparsable pattern.
    pub fn new(configs: &[CategoryRuleConfig]) -> Result<Self, ConfigError> {
        Ok(Self {
            rules: rules::compile_rules(configs)?,
        })
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category the rules assign to `name`, if any.
    pub fn category_for(&self, name: &str) -> Option<&str> {
        rules::find_matching_rule(&self.rules, name).map(|r| r.category.as_str())
    }

    /// Recategorize one concept. Only `category` may change.
    pub fn recategorize_one(&self, concept: &Concept) -> Concept {
        let mut out = concept.clone();
        if let Some(category) = self.category_for(&concept.name) {
            out.category = category.to_string();
        }
        out
    }

    /// Recategorize a batch, returning new records in the same order.
    pub fn recategorize(&self, concepts: &[Concept]) -> Vec<Concept> {
        self.recategorize_with_summary(concepts).0
    }

    pub fn recategorize_with_summary(
        &self,
        concepts: &[Concept],
    ) -> (Vec<Concept>, RecategorizationSummary) {
        let mut summary = RecategorizationSummary::default();
        let out = concepts
            .iter()
            .map(|concept| match self.category_for(&concept.name) {
                Some(category) => {
                    let mut next = concept.clone();
                    if next.category != category {
                        summary.changed += 1;
                        next.category = category.to_string();
                    }
                    next
                }
                None => {
                    summary.unmatched += 1;
                    concept.clone()
                }
            })
            .collect();

        debug!(
            changed = summary.changed,
            unmatched = summary.unmatched,
            "recategorization pass complete"
        );
        (out, summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use refinery_core::config::default_category_rules;

    fn engine() -> Recategorizer {
        Recategorizer::new(&default_category_rules()).unwrap()
    }

    #[test]
    fn only_category_changes() {
        let concept = Concept::new("Kubernetes")
            .with_frequency(4)
            .with_relevance(0.3)
            .with_related(["docker"]);
        let out = engine().recategorize_one(&concept);
        assert_eq!(out.category, "architecture");
        assert_eq!(out.frequency, 4);
        assert_eq!(out.related_concepts, vec!["docker"]);
        assert_eq!(out.name, concept.name);
    }

    #[test]
    fn unmatched_keeps_category() {
        let concept = Concept::new("sunset").with_category("nature");
        assert_eq!(engine().recategorize_one(&concept).category, "nature");
    }

    #[test]
    fn summary_counts_changes() {
        let concepts = vec![
            Concept::new("React"),
            Concept::new("Python").with_category("programming"),
            Concept::new("sunset"),
        ];
        let (out, summary) = engine().recategorize_with_summary(&concepts);
        assert_eq!(out.len(), 3);
        assert_eq!(summary.changed, 1);
        assert_eq!(summary.unmatched, 1);
    }
}
