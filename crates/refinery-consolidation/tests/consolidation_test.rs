//! Integration tests for refinery-consolidation: end-to-end refinement runs.

use chrono::{TimeZone, Utc};
use refinery_core::config::GroupingStrategy;
use refinery_core::errors::{ConfigError, RefineryError};
use refinery_core::traits::{IConceptRefiner, IConceptStore};
use refinery_core::{Concept, ConceptDatabase, RefinerConfig};

use refinery_consolidation::{render_report, similarity, ConceptRefiner};
use refinery_storage::{InMemoryStore, JsonFileStore};
use test_fixtures::{list_fixtures, load_fixture_value, load_input};

fn refiner() -> ConceptRefiner {
    ConceptRefiner::with_defaults().unwrap()
}

fn names(concepts: &[Concept]) -> Vec<&str> {
    concepts.iter().map(|c| c.name.as_str()).collect()
}

fn absorbed(refined: &ConceptDatabase) -> usize {
    refined
        .iter()
        .filter(|c| c.is_merged())
        .map(|c| c.merged_from.len() - 1)
        .sum()
}

#[test]
fn case_and_plural_variants_merge_into_one_record() {
    let db = ConceptDatabase::new(
        vec![
            Concept::new("API").with_frequency(5),
            Concept::new("api").with_frequency(3),
            Concept::new("apis").with_frequency(1),
        ],
        vec![],
    );
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 12, 0, 0).unwrap();
    let outcome = refiner().improve_at(&db, now);

    let all: Vec<&Concept> = outcome.database.iter().collect();
    assert_eq!(all.len(), 1);
    let merged = all[0];
    assert_eq!(merged.name, "API");
    assert_eq!(merged.frequency, 9);
    assert_eq!(merged.merged_from, vec!["API", "api", "apis"]);
    assert_eq!(merged.last_merged, Some(now));
    assert_eq!(merged.category, "programming");

    assert_eq!(outcome.stats.merged_groups, 1);
    assert_eq!(outcome.stats.absorbed_concepts, 2);
    assert_eq!(outcome.stats.final_count, 1);
}

#[test]
fn generic_pronoun_is_removed_regardless_of_frequency() {
    for frequency in [1, 10, 40, 1_000] {
        let db = ConceptDatabase::new(
            vec![
                Concept::new("그것").with_frequency(frequency),
                Concept::new("Rust").with_frequency(3),
            ],
            vec![],
        );
        let outcome = refiner().improve(&db);
        assert_eq!(names(&outcome.database.surface), vec!["Rust"]);
        assert!(outcome.database.deep.is_empty());
        assert_eq!(outcome.stats.removed_concepts, 1);
        assert_eq!(outcome.stats.noise_removed, 1);
    }
}

#[test]
fn particles_and_prepositions_are_removed_as_noise() {
    let refiner = refiner();
    for name in ["에서", "으로", "까지", "in", "on", "as", "of", "something", "anything", "것"] {
        for frequency in [1, 5, 40] {
            let db = ConceptDatabase::new(
                vec![Concept::new(name).with_frequency(frequency)],
                vec![],
            );
            let outcome = refiner.improve(&db);
            assert!(outcome.database.is_empty(), "{name} survived at {frequency}");
            assert_eq!(outcome.stats.noise_removed, 1, "{name}");
            assert!(refiner.scorer().score(&Concept::new(name)) < 0.2, "{name}");
        }
    }
}

#[test]
fn english_pronoun_is_removed_regardless_of_frequency() {
    let db = ConceptDatabase::new(vec![Concept::new("it").with_frequency(25)], vec![]);
    let outcome = refiner().improve(&db);
    assert!(outcome.database.is_empty());
    assert_eq!(outcome.stats.noise_removed, 1);
}

#[test]
fn empty_database_yields_empty_output() {
    let outcome = refiner().improve(&ConceptDatabase::default());
    assert!(outcome.database.surface.is_empty());
    assert!(outcome.database.deep.is_empty());
    assert_eq!(outcome.stats.original_count, 0);
    assert_eq!(outcome.stats.improvement_ratio, 0.0);
}

#[test]
fn golden_fixtures_match_expected_outcomes() {
    for path in list_fixtures("golden/refinement") {
        let relative = format!(
            "golden/refinement/{}",
            path.file_name().unwrap().to_string_lossy()
        );
        let db: ConceptDatabase = load_input(&relative);
        let fixture = load_fixture_value(&relative);
        let expected = &fixture["expected"];
        let outcome = refiner().improve(&db);
        let stats = &outcome.stats;

        let count = |key: &str| expected[key].as_u64().unwrap() as usize;
        assert_eq!(stats.original_count, count("originalCount"), "{relative}");
        assert_eq!(stats.merged_groups, count("mergedGroups"), "{relative}");
        assert_eq!(stats.absorbed_concepts, count("absorbedConcepts"), "{relative}");
        assert_eq!(stats.removed_concepts, count("removedConcepts"), "{relative}");
        assert_eq!(stats.noise_removed, count("noiseRemoved"), "{relative}");
        assert_eq!(stats.final_count, count("finalCount"), "{relative}");

        let expected_names = |key: &str| -> Vec<String> {
            serde_json::from_value(expected[key].clone()).unwrap()
        };
        assert_eq!(
            names(&outcome.database.surface),
            expected_names("surface"),
            "{relative}"
        );
        assert_eq!(
            names(&outcome.database.deep),
            expected_names("deep"),
            "{relative}"
        );

        if let Some(categories) = expected["categories"].as_object() {
            for (name, category) in categories {
                let concept = outcome.database.iter().find(|c| &c.name == name).unwrap();
                assert_eq!(concept.category, category.as_str().unwrap(), "{relative}: {name}");
            }
        }
        if let Some(merged) = expected["mergedFrom"].as_object() {
            for (name, members) in merged {
                let concept = outcome.database.iter().find(|c| &c.name == name).unwrap();
                let members: Vec<String> = serde_json::from_value(members.clone()).unwrap();
                assert_eq!(concept.merged_from, members, "{relative}: {name}");
            }
        }
        if let Some(frequencies) = expected["frequencies"].as_object() {
            for (name, frequency) in frequencies {
                let concept = outcome.database.iter().find(|c| &c.name == name).unwrap();
                assert_eq!(Some(concept.frequency), frequency.as_u64(), "{relative}: {name}");
            }
        }
    }
}

#[test]
fn mixed_database_statistics() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let stats = refiner().improve(&db).stats;

    assert!((stats.improvement_ratio - 400.0 / 9.0).abs() < 1e-9);
    assert_eq!(stats.surface_count, 3);
    assert_eq!(stats.deep_count, 1);
    assert_eq!(stats.tier_distribution.excellent, 2);
    assert_eq!(stats.tier_distribution.good, 1);
    assert_eq!(stats.tier_distribution.acceptable, 1);
    assert_eq!(stats.tier_distribution.poor, 0);
    assert_eq!(stats.tier_distribution.total(), stats.final_count);
}

#[test]
fn count_invariant_holds() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let outcome = refiner().improve(&db);
    let stats = &outcome.stats;

    assert!(stats.final_count <= stats.original_count);
    assert_eq!(
        stats.final_count,
        stats.original_count - stats.removed_concepts - stats.absorbed_concepts
    );
    assert_eq!(stats.final_count, outcome.database.len());
    assert_eq!(absorbed(&outcome.database), stats.absorbed_concepts);
}

#[test]
fn surviving_records_are_pairwise_dissimilar() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let outcome = refiner().improve(&db);
    let all: Vec<&Concept> = outcome.database.iter().collect();
    for (i, a) in all.iter().enumerate() {
        for b in &all[i + 1..] {
            assert!(similarity(&a.name, &b.name) < 0.85, "{} ~ {}", a.name, b.name);
        }
    }
}

#[test]
fn second_run_is_a_no_op() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let first = refiner().improve(&db);
    let second = refiner().improve(&first.database);

    assert_eq!(second.stats.merged_groups, 0);
    assert_eq!(second.stats.removed_concepts, 0);
    assert_eq!(second.stats.final_count, first.stats.final_count);
    assert_eq!(
        names(&second.database.surface),
        names(&first.database.surface)
    );
}

#[test]
fn every_survivor_carries_a_quality_score() {
    let db: ConceptDatabase = load_input("golden/refinement/already_clean.json");
    let outcome = refiner().improve(&db);
    let scorer = refiner().scorer().clone();
    for concept in outcome.database.iter() {
        let score = concept.quality_score.unwrap();
        assert!((0.0..=1.0).contains(&score));
        assert!(score >= 0.4);
        assert_eq!(score, scorer.score(concept));
    }
}

#[test]
fn extra_fields_pass_through_refinement() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let outcome = refiner().improve(&db);
    let kubernetes = outcome
        .database
        .iter()
        .find(|c| c.name == "Kubernetes")
        .unwrap();
    assert_eq!(kubernetes.extra["source"], "chat-42");
}

#[test]
fn transitive_strategy_merges_chains() {
    let db = ConceptDatabase::new(
        vec![
            Concept::new("abcdefgh"),
            Concept::new("abcdefgX"),
            Concept::new("abcdefYX"),
        ],
        vec![],
    );

    let leader = refiner().improve(&db);
    assert_eq!(leader.stats.merged_groups, 1);
    assert_eq!(leader.stats.absorbed_concepts, 1);

    let mut config = RefinerConfig::default();
    config.grouping.strategy = GroupingStrategy::Transitive;
    let transitive = ConceptRefiner::new(config).unwrap().improve(&db);
    assert_eq!(transitive.stats.merged_groups, 1);
    assert_eq!(transitive.stats.absorbed_concepts, 2);
}

#[test]
fn toml_config_drives_the_pipeline() {
    let config = RefinerConfig::from_toml(
        r#"
        [thresholds]
        acceptable = 0.9
        good = 0.95
        excellent = 0.98

        [partition]
        surface_categories = []
        "#,
    )
    .unwrap();
    let refiner = ConceptRefiner::new(config).unwrap();
    let db = ConceptDatabase::new(
        vec![Concept::new("Docker").with_frequency(6), Concept::new("sunset")],
        vec![],
    );
    let outcome = refiner.improve(&db);
    assert_eq!(names(&outcome.database.surface), vec!["Docker"]);
    assert_eq!(outcome.stats.removed_concepts, 1);
}

#[test]
fn invalid_config_fails_before_any_work() {
    let mut config = RefinerConfig::default();
    config.thresholds.good = 0.3;
    let err = ConceptRefiner::new(config).unwrap_err();
    assert!(matches!(
        err,
        RefineryError::ConfigError(ConfigError::TiersNotAscending { .. })
    ));
}

#[test]
fn refine_store_saves_the_refined_database() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let store = InMemoryStore::new(db);
    let stats = refiner().refine_store(&store).unwrap();

    let saved = store.load().unwrap();
    assert_eq!(saved.len(), stats.final_count);
    assert_eq!(names(&saved.surface), vec!["API", "Kubernetes", "sunset"]);
}

#[test]
fn refine_store_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("concepts.json"));
    store
        .save(&ConceptDatabase::new(
            vec![Concept::new("Docker"), Concept::new("docker")],
            vec![Concept::new("그것")],
        ))
        .unwrap();

    let stats = refiner().refine_store(&store).unwrap();
    assert_eq!(stats.merged_groups, 1);
    assert_eq!(stats.noise_removed, 1);

    let saved = store.load().unwrap();
    assert_eq!(names(&saved.surface), vec!["Docker"]);
    assert_eq!(saved.surface[0].frequency, 2);
}

#[test]
fn report_describes_the_run() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let stats = refiner().improve(&db).stats;
    let report = render_report(&stats);
    assert!(report.contains("Original concepts:  9"));
    assert!(report.contains("merged 1 duplicate groups (2 concepts absorbed)"));
    assert!(report.contains("removed 3 low-quality concepts (2 below the noise floor)"));
}
