//! JsonFileStore against real files.

use refinery_core::errors::{RefineryError, StorageError};
use refinery_core::traits::IConceptStore;
use refinery_core::{Concept, ConceptDatabase};
use refinery_storage::{InMemoryStore, JsonFileStore};
use test_fixtures::load_input;

#[test]
fn missing_file_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("absent.json"));
    assert!(store.load().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_records_and_extra_fields() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("nested").join("concepts.json"));

    let mut kubernetes = Concept::new("Kubernetes").with_frequency(4);
    kubernetes
        .extra
        .insert("source".into(), serde_json::json!("chat-42"));
    let db = ConceptDatabase::new(vec![kubernetes], vec![Concept::new("sunset")]);

    store.save(&db).unwrap();
    assert_eq!(store.load().unwrap(), db);
    assert!(!dir.path().join("nested").join("concepts.json.tmp").exists());
}

#[test]
fn saved_file_is_pretty_camel_case_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("concepts.json");
    let store = JsonFileStore::new(&path);
    let db = ConceptDatabase::new(vec![Concept::new("API").with_related(["REST"])], vec![]);
    store.save(&db).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));
    assert!(text.contains("\"relatedConcepts\""));
    assert!(!text.contains("qualityScore"));
}

#[test]
fn corrupt_file_is_a_serialization_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::new(&path).load().unwrap_err();
    assert!(matches!(
        err,
        RefineryError::StorageError(StorageError::Serialization { .. })
    ));
}

#[test]
fn golden_fixture_round_trips_through_disk() {
    let db: ConceptDatabase = load_input("golden/refinement/mixed_database.json");
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("mixed.json"));
    store.save(&db).unwrap();
    assert_eq!(store.load().unwrap(), db);

    let memory = InMemoryStore::new(db.clone());
    assert_eq!(memory.load().unwrap().len(), 9);
}

#[test]
fn loose_extractor_records_load_with_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("extracted.json");
    std::fs::write(
        &path,
        r#"{"surface": [{"name": "Rust", "category": null, "frequency": 2.0, "confidence": null}]}"#,
    )
    .unwrap();

    let db = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(db.surface[0].category, "general");
    assert_eq!(db.surface[0].frequency, 2);
    assert_eq!(db.surface[0].relevance, 0.0);
    assert!(db.deep.is_empty());
}
