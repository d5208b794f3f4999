use std::fs;
use tempfile::TempDir;
use wats::api::{MessageLevel, WatsApi};
use wats::error::WatsError;
use wats::model::AnimalRecord;
use wats::store::sqlite::SqliteStore;
use wats::store::{RecordStore, WriteOutcome};

fn setup() -> (TempDir, SqliteStore) {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::create(dir.path().join("wats.db")).unwrap();
    (dir, store)
}

fn animal(id: i32, species: &str, name: &str, weight: f64) -> AnimalRecord {
    AnimalRecord::new(id, species, name, 6, "Male", weight, "Healthy").unwrap()
}

fn big_cats(store: &mut SqliteStore) {
    store.insert(&animal(1, "Lion", "Simba", 100.0)).unwrap();
    store.insert(&animal(2, "Lion", "Nala", 150.0)).unwrap();
    store.insert(&animal(3, "Tiger", "Shere Khan", 200.0)).unwrap();
}

#[test]
fn test_empty_table_lists_nothing() {
    let (_dir, store) = setup();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_insert_then_get_returns_equal_record() {
    let (_dir, mut store) = setup();
    let record = AnimalRecord::new(42, "Gray Wolf", "Akela", 7, "Female", 38.75, "Recovering")
        .unwrap();

    store.insert(&record).unwrap();
    assert_eq!(store.get_by_id(42).unwrap(), Some(record));
}

#[test]
fn test_text_is_stored_verbatim() {
    let (_dir, mut store) = setup();
    let record = AnimalRecord::new(1, " lion ", "O'Brien; DROP", 1, "male", 1.0, "fine").unwrap();

    store.insert(&record).unwrap();
    let loaded = store.get_by_id(1).unwrap().unwrap();
    assert_eq!(loaded.species(), " lion ");
    assert_eq!(loaded.name(), "O'Brien; DROP");
    assert_eq!(loaded.health_status(), "fine");
}

#[test]
fn test_duplicate_insert_keeps_first_record() {
    let (_dir, mut store) = setup();
    let first = animal(7, "Lion", "Mufasa", 190.0);
    store.insert(&first).unwrap();

    let err = store.insert(&animal(7, "Hyena", "Ed", 60.0)).unwrap_err();
    assert!(matches!(err, WatsError::DuplicateId(7)));
    assert_eq!(store.get_by_id(7).unwrap(), Some(first));
    assert_eq!(store.list_all().unwrap().len(), 1);
}

#[test]
fn test_update_missing_id_changes_nothing() {
    let (_dir, mut store) = setup();
    big_cats(&mut store);
    let before = store.list_all().unwrap();

    let outcome = store.update(&animal(99, "Zebra", "Marty", 300.0)).unwrap();
    assert_eq!(outcome, WriteOutcome::NotFound);
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_update_touches_only_target_row() {
    let (_dir, mut store) = setup();
    big_cats(&mut store);

    let mut nala = store.get_by_id(2).unwrap().unwrap();
    nala.set_species("Lioness");
    nala.set_name("Queen Nala");
    nala.set_age(8).unwrap();
    nala.set_gender("Female");
    nala.set_weight(155.5).unwrap();
    nala.set_health_status("Sick");

    assert_eq!(store.update(&nala).unwrap(), WriteOutcome::Applied);

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0], animal(1, "Lion", "Simba", 100.0));
    assert_eq!(all[1], nala);
    assert_eq!(all[2], animal(3, "Tiger", "Shere Khan", 200.0));
}

#[test]
fn test_delete_existing_and_missing() {
    let (_dir, mut store) = setup();
    big_cats(&mut store);

    assert_eq!(store.delete(1).unwrap(), WriteOutcome::Applied);
    assert_eq!(store.get_by_id(1).unwrap(), None);

    let before = store.list_all().unwrap();
    assert_eq!(store.delete(1).unwrap(), WriteOutcome::NotFound);
    assert_eq!(store.list_all().unwrap(), before);
}

#[test]
fn test_average_weight() {
    let (_dir, mut store) = setup();
    big_cats(&mut store);

    assert_eq!(store.average_weight("Lion").unwrap(), Some(125.0));
    assert_eq!(store.average_weight("Tiger").unwrap(), Some(200.0));
    assert_eq!(store.average_weight("Zebra").unwrap(), None);
    assert_eq!(store.average_weight("lion").unwrap(), None);
}

#[test]
fn test_writes_are_visible_to_a_fresh_store() {
    let (dir, mut store) = setup();
    big_cats(&mut store);

    let reopened = SqliteStore::new(dir.path().join("wats.db"));
    assert_eq!(reopened.list_all().unwrap().len(), 3);
}

#[test]
fn test_connect_missing_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::new(dir.path().join("missing.db"));

    assert!(matches!(
        store.connect(),
        Err(WatsError::StorageUnavailable { .. })
    ));
    assert!(matches!(
        store.list_all(),
        Err(WatsError::StorageUnavailable { .. })
    ));
}

#[test]
fn test_connect_non_database_file_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    fs::write(&path, "these are not the animals you are looking for, padded out to be long enough to not look like an empty database file").unwrap();

    let store = SqliteStore::new(&path);
    assert!(matches!(
        store.connect(),
        Err(WatsError::StorageUnavailable { .. })
    ));
}

#[test]
fn test_connect_without_table_is_unavailable() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("other.db");
    let conn = rusqlite::Connection::open(&path).unwrap();
    conn.execute_batch("CREATE TABLE Plants (id INTEGER PRIMARY KEY)")
        .unwrap();
    drop(conn);

    let store = SqliteStore::new(&path);
    match store.connect() {
        Err(WatsError::StorageUnavailable { reason, .. }) => {
            assert!(reason.contains("WildAnimals"))
        }
        other => panic!("expected unavailable, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_api_turns_unavailable_store_into_values() {
    let dir = TempDir::new().unwrap();
    let mut api = WatsApi::new(SqliteStore::new(dir.path().join("gone.db")));

    let listed = api.list_all();
    assert!(!listed.is_success());
    assert!(listed.listed_records.is_empty());
    assert_eq!(listed.messages[0].level, MessageLevel::Error);
    assert!(listed.messages[0].content.contains("gone.db"));

    assert!(!api.insert(animal(1, "Lion", "Simba", 1.0)).is_success());

    let deleted = api.delete(1);
    assert!(!deleted.is_success());
    assert_eq!(deleted.messages[0].level, MessageLevel::Error);
    assert!(deleted.messages[0].content.contains("gone.db"));
    assert_eq!(api.average_weight("Lion").average, None);
}

#[test]
fn test_api_deletes_row_that_breaks_record_rules() {
    let (dir, mut store) = setup();
    store.insert(&animal(6, "Lion", "Kiara", 120.0)).unwrap();

    let conn = rusqlite::Connection::open(dir.path().join("wats.db")).unwrap();
    conn.execute(
        "INSERT INTO WildAnimals VALUES (5, 'Lion', 'Bad', -2, 'Male', 10.0, 'Sick')",
        [],
    )
    .unwrap();
    drop(conn);

    let mut api = WatsApi::new(store);
    let listed = api.list_all();
    assert!(listed.is_success());
    assert_eq!(listed.listed_records.len(), 1);
    assert_eq!(listed.listed_records[0].id(), 6);

    let deleted = api.delete(5);
    assert!(deleted.is_success());
    assert_eq!(deleted.messages[0].level, MessageLevel::Success);
    assert_eq!(api.delete(5).messages[0].level, MessageLevel::Warning);
}

#[test]
fn test_api_over_sqlite_end_to_end() {
    let (_dir, store) = setup();
    let mut api = WatsApi::new(store);

    assert!(api.insert(animal(1, "Lion", "Simba", 100.0)).is_success());
    assert!(api.insert(animal(2, "Lion", "Nala", 150.0)).is_success());
    assert!(!api.insert(animal(2, "Lion", "Copy", 1.0)).is_success());

    assert_eq!(api.average_weight("Lion").average.unwrap().mean, 125.0);
    assert!(api.delete(2).is_success());
    assert_eq!(api.list_all().listed_records.len(), 1);
}
