//! Phase 1: Attach a fresh quality score to every record.

use refinery_core::Concept;

use crate::quality::QualityScorer;

/// Return scored copies of `concepts`, in order.
pub fn score_all(concepts: &[Concept], scorer: &QualityScorer) -> Vec<Concept> {
    concepts
        .iter()
        .map(|concept| {
            let mut scored = concept.clone();
            scored.quality_score = Some(scorer.score(concept));
            scored
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use refinery_core::config::ScoringConfig;

    #[test]
    fn stale_scores_are_replaced() {
        let scorer = QualityScorer::new(&ScoringConfig::default()).unwrap();
        let mut stale = Concept::new("그것");
        stale.quality_score = Some(0.99);
        let scored = score_all(&[stale], &scorer);
        assert_eq!(scored[0].quality_score, Some(0.0));
    }
}
