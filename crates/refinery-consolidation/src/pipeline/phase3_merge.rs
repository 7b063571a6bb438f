//! Phase 3: Collapse a duplicate cluster into one representative.
//!
//! The base record is the member with the strictly highest recomputed score,
//! ties going to the earliest member. The representative inherits the base's
//! name, category, relevance, and extra fields, and aggregates the rest.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use refinery_core::Concept;

use crate::quality::QualityScorer;

/// Merge `cluster` into a single record stamped with `now`.
///
/// A single member is returned unchanged; an empty cluster yields `None`.
pub fn merge_cluster(
    cluster: &[&Concept],
    scorer: &QualityScorer,
    max_related: usize,
    now: DateTime<Utc>,
) -> Option<Concept> {
    match cluster {
        [] => return None,
        [only] => return Some((*only).clone()),
        _ => {}
    }

    let (base_idx, base_score) = select_base(cluster, scorer);
    let mut merged = cluster[base_idx].clone();

    merged.frequency = cluster
        .iter()
        .fold(0u64, |acc, m| acc.saturating_add(m.frequency));
    merged.related_concepts = union_related(cluster, max_related);
    merged.merged_from = cluster.iter().map(|m| m.name.clone()).collect();
    merged.last_merged = Some(now);
    merged.quality_score = Some(base_score);

    Some(merged)
}

/// Index and score of the best member. Later members must score strictly higher to win.
fn select_base(cluster: &[&Concept], scorer: &QualityScorer) -> (usize, f64) {
    let mut best = (0, scorer.score(cluster[0]));
    for (idx, member) in cluster.iter().enumerate().skip(1) {
        let score = scorer.score(member);
        if score > best.1 {
            best = (idx, score);
        }
    }
    best
}

/// Related concepts across the cluster, first occurrence first, capped at `max_related`.
fn union_related(cluster: &[&Concept], max_related: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    cluster
        .iter()
        .flat_map(|m| m.related_concepts.iter())
        .filter(|r| seen.insert(r.as_str()))
        .take(max_related)
        .cloned()
        .collect()
}
