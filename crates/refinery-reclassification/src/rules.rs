//! Compiled category rule-sets.
//!
//! Defaults: technology (AI/ML) → programming → architecture → data →
//! methodology → business. See `refinery_core::config::tables::CATEGORY_RULES`.

use refinery_core::config::CategoryRuleConfig;
use refinery_core::errors::ConfigError;
use regex::Regex;

/// A category label with the patterns that select it.
#[derive(Debug, Clone)]
pub struct CategoryRule {
    pub category: String,
    pub patterns: Vec<Regex>,
}

impl CategoryRule {
    /// True if any pattern matches `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }
}

/// Compile rule-set configs, preserving order. Fails on the first bad pattern.
pub fn compile_rules(configs: &[CategoryRuleConfig]) -> Result<Vec<CategoryRule>, ConfigError> {
    configs
        .iter()
        .enumerate()
        .map(|(index, config)| {
            if config.category.trim().is_empty() {
                return Err(ConfigError::EmptyCategory { index });
            }
            let patterns = config
                .patterns
                .iter()
                .map(|source| {
                    Regex::new(source).map_err(|e| ConfigError::InvalidPattern {
                        table: format!("categories.{}", config.category),
                        pattern: source.clone(),
                        reason: e.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(CategoryRule {
                category: config.category.clone(),
                patterns,
            })
        })
        .collect()
}

/// First rule whose patterns match `name`.
pub fn find_matching_rule<'a>(rules: &'a [CategoryRule], name: &str) -> Option<&'a CategoryRule> {
    rules.iter().find(|rule| rule.matches(name))
}
