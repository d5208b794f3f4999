use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn wats(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wats").unwrap();
    cmd.env("WATS_CONFIG_DIR", home.join("config"))
        .env_remove("WATS_DB")
        .env("NO_COLOR", "1");
    cmd
}

fn add(home: &Path, db: &Path, id: &str, species: &str, name: &str, weight: &str) {
    wats(home)
        .arg("--db")
        .arg(db)
        .args(["add", "--id", id, "--species", species, "--name", name])
        .args(["--age", "5", "--gender", "Male", "--weight", weight])
        .args(["--health", "Healthy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Animal added successfully"));
}

fn seeded() -> (TempDir, std::path::PathBuf) {
    let home = TempDir::new().unwrap();
    let db = home.path().join("animals.db");

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized animal database"));

    add(home.path(), &db, "1", "Lion", "Simba", "100");
    add(home.path(), &db, "2", "Lion", "Nala", "150");
    add(home.path(), &db, "3", "Tiger", "Rajah", "200");
    (home, db)
}

#[test]
fn test_list_shows_every_record() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tag ID"))
        .stdout(predicate::str::contains("Simba"))
        .stdout(predicate::str::contains("Nala"))
        .stdout(predicate::str::contains("Rajah"));
}

#[test]
fn test_list_json() {
    let (home, db) = seeded();

    let output = wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["ls", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[2]["name"], "Rajah");
    assert_eq!(records[2]["weight"], 200.0);
}

#[test]
fn test_show_and_missing_tag_id() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ID: 2 | Species: Lion | Name: Nala"));

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["show", "42"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No record found with Tag ID 42"));
}

#[test]
fn test_duplicate_tag_id_is_rejected() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["add", "--id", "1", "--species", "Hyena", "--name", "Ed"])
        .args(["--age", "3", "--gender", "Male", "--weight", "60"])
        .args(["--health", "Healthy"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Tag ID 1 already exists"));
}

#[test]
fn test_invalid_entry_is_rejected() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["add", "--id", "9", "--species", "Owl", "--name", "Hoot"])
        .args(["--age", "two", "--gender", "Female", "--weight", "1.5"])
        .args(["--health", "Healthy"])
        .assert()
        .failure();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["show", "9"])
        .assert()
        .failure();
}

#[test]
fn test_update_keeps_omitted_fields() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["update", "2", "--weight", "160.5", "--health", "injured"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Animal updated successfully"));

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["show", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Name: Nala"))
        .stdout(predicate::str::contains("Weight: 160.50 | Health: Injured"));
}

#[test]
fn test_update_missing_tag_id_fails() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["edit", "77", "--name", "Ghost"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No record found with Tag ID 77"));
}

#[test]
fn test_delete_then_delete_again() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["delete", "1", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Animal deleted successfully (Tag ID 1)"));

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["rm", "1", "--yes"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("No record found with Tag ID 1"));
}

#[test]
fn test_average_weight() {
    let (home, db) = seeded();

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["average", "Lion"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Average weight for species 'Lion': 125.00 kg",
        ));

    wats(home.path())
        .arg("--db")
        .arg(&db)
        .args(["avg", "Zebra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No animals found for species: Zebra"));
}

#[test]
fn test_missing_database_fails_up_front() {
    let home = TempDir::new().unwrap();

    wats(home.path())
        .arg("--db")
        .arg(home.path().join("nope.db"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Database unavailable"));
}

#[test]
fn test_no_database_selected() {
    let home = TempDir::new().unwrap();

    wats(home.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No database selected"));
}

#[test]
fn test_init_remembers_database() {
    let home = TempDir::new().unwrap();
    let db = home.path().join("remembered.db");

    wats(home.path()).arg("init").arg(&db).assert().success();

    wats(home.path())
        .args(["config", "db"])
        .assert()
        .success()
        .stdout(predicate::str::contains("remembered.db"));

    wats(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No animal records found."));
}

#[test]
fn test_env_database_is_used() {
    let (home, db) = seeded();

    wats(home.path())
        .env("WATS_DB", &db)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Simba"));
}
