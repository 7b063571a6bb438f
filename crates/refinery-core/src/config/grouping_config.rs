use serde::{Deserialize, Serialize};

/// How duplicate clusters are formed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupingStrategy {
    /// Members are compared against the cluster leader only.
    #[default]
    Leader,
    /// Connected components of the pairwise similarity graph.
    Transitive,
}

/// Duplicate grouping configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupingConfig {
    pub strategy: GroupingStrategy,
}
