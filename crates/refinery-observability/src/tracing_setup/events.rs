//! Structured log events for refinement runs.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log completion of a refinement run.
pub fn refinement_completed(
    original: usize,
    merged_groups: usize,
    removed: usize,
    final_count: usize,
    improvement_ratio: f64,
) {
    tracing::info!(
        event = "refinement_completed",
        original = original,
        merged_groups = merged_groups,
        removed = removed,
        final_count = final_count,
        improvement_ratio = improvement_ratio,
        "refinement completed"
    );
}

/// Log a duplicate cluster collapsing into one record.
pub fn concepts_merged(representative: &str, members: usize, frequency: u64) {
    tracing::debug!(
        event = "concepts_merged",
        representative = %representative,
        members = members,
        frequency = frequency,
        "duplicate cluster merged"
    );
}

/// Log records dropped by the quality gate.
pub fn concepts_filtered(removed: usize, noise: usize, threshold: f64) {
    tracing::info!(
        event = "concepts_filtered",
        removed = removed,
        noise = noise,
        threshold = threshold,
        "low-quality concepts filtered"
    );
}

/// Log a configuration rejected at construction time.
pub fn config_rejected(reason: &str) {
    tracing::warn!(
        event = "config_rejected",
        reason = %reason,
        "refiner configuration rejected"
    );
}
