//! ConceptRefiner: validated config, compiled tables, and the pipeline entry points.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use refinery_core::errors::{ConfigError, RefineryResult};
use refinery_core::traits::{IConceptRefiner, IConceptStore};
use refinery_core::{ConceptDatabase, ImprovementStats, RefinementOutcome, RefinerConfig};
use refinery_observability::events;
use refinery_reclassification::Recategorizer;
use tracing::info;

use crate::pipeline;
use crate::quality::QualityScorer;

/// The refinement engine.
///
/// Holds no per-run state: every call works on its own snapshot, so one
/// refiner can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct ConceptRefiner {
    config: RefinerConfig,
    scorer: QualityScorer,
    recategorizer: Recategorizer,
}

impl ConceptRefiner {
    /// Validate `config` and compile every rule table.
    pub fn new(config: RefinerConfig) -> RefineryResult<Self> {
        let built = Self::build(config);
        if let Err(err) = &built {
            events::config_rejected(&err.to_string());
        }
        built.map_err(Into::into)
    }

    /// A refiner with the default thresholds and tables.
    pub fn with_defaults() -> RefineryResult<Self> {
        Self::new(RefinerConfig::default())
    }

    fn build(config: RefinerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = QualityScorer::new(&config.scoring)?;
        let recategorizer = Recategorizer::new(&config.categories)?;
        Ok(Self {
            config,
            scorer,
            recategorizer,
        })
    }

    pub fn config(&self) -> &RefinerConfig {
        &self.config
    }

    pub fn scorer(&self) -> &QualityScorer {
        &self.scorer
    }

    pub fn recategorizer(&self) -> &Recategorizer {
        &self.recategorizer
    }

    /// Refine `database`, stamping merged records with `now`.
    pub fn improve_at(&self, database: &ConceptDatabase, now: DateTime<Utc>) -> RefinementOutcome {
        pipeline::run_pipeline(
            database,
            &self.config,
            &self.scorer,
            &self.recategorizer,
            now,
        )
    }

    /// Refine independent snapshots in parallel. Output order matches input order.
    pub fn improve_all(&self, databases: &[ConceptDatabase]) -> Vec<RefinementOutcome> {
        let now = Utc::now();
        databases
            .par_iter()
            .map(|db| self.improve_at(db, now))
            .collect()
    }

    /// Load from `store`, refine, and save the result back.
    pub fn refine_store(&self, store: &dyn IConceptStore) -> RefineryResult<ImprovementStats> {
        let current = store.load()?;
        let outcome = self.improve(&current);
        store.save(&outcome.database)?;
        info!(
            final_count = outcome.stats.final_count,
            "refined database saved"
        );
        Ok(outcome.stats)
    }
}

impl IConceptRefiner for ConceptRefiner {
    fn improve(&self, database: &ConceptDatabase) -> RefinementOutcome {
        self.improve_at(database, Utc::now())
    }
}
