//! Phase 5: Reassign category labels on the survivors.

use refinery_core::Concept;
use refinery_reclassification::{RecategorizationSummary, Recategorizer};
use tracing::info;

pub fn recategorize_survivors(
    survivors: &[Concept],
    recategorizer: &Recategorizer,
) -> (Vec<Concept>, RecategorizationSummary) {
    let (out, summary) = recategorizer.recategorize_with_summary(survivors);
    info!(
        changed = summary.changed,
        unmatched = summary.unmatched,
        "Phase 5: recategorization complete"
    );
    (out, summary)
}
