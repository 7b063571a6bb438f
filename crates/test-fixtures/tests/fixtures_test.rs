//! Golden refinement fixtures deserialize into the core data model.

use refinery_core::{Concept, ConceptDatabase};
use test_fixtures::{fixture_exists, list_fixtures, load_fixture_value, load_input};

#[test]
fn every_input_is_a_concept_database() {
    for path in list_fixtures("golden/refinement") {
        let relative = format!(
            "golden/refinement/{}",
            path.file_name().unwrap().to_string_lossy()
        );
        let db: ConceptDatabase = load_input(&relative);
        let expected = load_fixture_value(&relative)["expected"]["originalCount"]
            .as_u64()
            .unwrap();
        assert_eq!(db.len() as u64, expected, "{relative}");
    }
}

#[test]
fn scenario_files_are_present() {
    assert!(fixture_exists("golden/refinement/malformed_records.json"));
    assert!(!fixture_exists("golden/refinement/absent.json"));
}

#[test]
fn malformed_records_fall_back_to_defaults() {
    let db: ConceptDatabase = load_input("golden/refinement/malformed_records.json");
    let concepts: Vec<&Concept> = db.iter().collect();

    assert_eq!(concepts[0].name, "");
    assert_eq!(concepts[0].frequency, 2);
    assert_eq!(concepts[1].frequency, 1);
    assert!(concepts[1].related_concepts.is_empty());
    assert_eq!(concepts[2].category, "general");
    assert!((concepts[2].relevance - 0.9).abs() < f64::EPSILON);

    assert_eq!(concepts[3].frequency, 2);
    assert_eq!(concepts[3].category, "general");
    assert_eq!(concepts[3].relevance, 0.0);
}

#[test]
fn unknown_fields_survive_deserialization() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let kubernetes = db.iter().find(|c| c.name == "Kubernetes").unwrap();
    assert_eq!(kubernetes.extra["source"], "chat-42");
}
