use serde::{Deserialize, Serialize};

use super::tables;

/// One category rule-set: the first matching pattern assigns `category`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRuleConfig {
    pub category: String,
    pub patterns: Vec<String>,
}

/// Ordered category rule-sets. Order is significant: the first rule-set with
/// a matching pattern wins.
pub fn default_category_rules() -> Vec<CategoryRuleConfig> {
    tables::CATEGORY_RULES
        .iter()
        .map(|(category, patterns)| CategoryRuleConfig {
            category: category.to_string(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}
