//! Phase 2: Partition concepts into duplicate clusters.
//!
//! Leader strategy: a single left-to-right pass; each unconsumed concept opens a
//! cluster and claims every later unconsumed concept similar to *it*. Members are
//! never compared with each other, so clusters are not transitive closures.
//!
//! Transitive strategy: connected components of the pairwise similarity graph.

use std::collections::HashMap;

use petgraph::unionfind::UnionFind;
use refinery_core::config::GroupingStrategy;
use refinery_core::Concept;

use crate::algorithms::similarity;

/// Clusters of indices (each of size ≥ 2) plus the indices left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingResult {
    /// Ordered by the position of each cluster's first member; members in input order.
    pub clusters: Vec<Vec<usize>>,
    pub singletons: Vec<usize>,
}

impl GroupingResult {
    /// Records that disappear when each cluster collapses to one.
    pub fn absorbed(&self) -> usize {
        self.clusters.iter().map(|c| c.len() - 1).sum()
    }
}

/// Group `concepts` by name similarity ≥ `threshold`.
pub fn group_duplicates(
    concepts: &[Concept],
    threshold: f64,
    strategy: GroupingStrategy,
) -> GroupingResult {
    let names: Vec<&str> = concepts.iter().map(|c| c.name.as_str()).collect();
    let clusters = match strategy {
        GroupingStrategy::Leader => leader_clusters(&names, threshold),
        GroupingStrategy::Transitive => transitive_clusters(&names, threshold),
    };

    let mut clustered = vec![false; names.len()];
    for &idx in clusters.iter().flatten() {
        clustered[idx] = true;
    }
    let singletons = (0..names.len()).filter(|&i| !clustered[i]).collect();

    GroupingResult {
        clusters,
        singletons,
    }
}

fn leader_clusters(names: &[&str], threshold: f64) -> Vec<Vec<usize>> {
    let mut consumed = vec![false; names.len()];
    let mut clusters = Vec::new();

    for i in 0..names.len() {
        if consumed[i] {
            continue;
        }
        let mut cluster = vec![i];
        for j in (i + 1)..names.len() {
            if !consumed[j] && similarity(names[i], names[j]) >= threshold {
                cluster.push(j);
                consumed[j] = true;
            }
        }
        consumed[i] = true;

        if cluster.len() > 1 {
            clusters.push(cluster);
        }
    }

    clusters
}

fn transitive_clusters(names: &[&str], threshold: f64) -> Vec<Vec<usize>> {
    let mut components = UnionFind::<usize>::new(names.len());
    for i in 0..names.len() {
        for j in (i + 1)..names.len() {
            if similarity(names[i], names[j]) >= threshold {
                components.union(i, j);
            }
        }
    }

    // Indices ascend, so each component is created at its smallest member.
    let mut slot_by_root: HashMap<usize, usize> = HashMap::new();
    let mut clusters: Vec<Vec<usize>> = Vec::new();
    for (idx, root) in components.into_labeling().into_iter().enumerate() {
        let slot = *slot_by_root.entry(root).or_insert_with(|| {
            clusters.push(Vec::new());
            clusters.len() - 1
        });
        clusters[slot].push(idx);
    }

    clusters.retain(|c| c.len() > 1);
    clusters
}
