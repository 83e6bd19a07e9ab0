use articles_core::db::{BootstrapScripts, DbError, SCHEMA_FILE_NAME, SEED_FILE_NAME};
use articles_core::{BootstrapStage, StoreConfig, StoreError, WordRepository, WordStore};
use rusqlite::Connection;

const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS dictionary (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    word TEXT NOT NULL
);";
const SEED_SQL: &str =
    "INSERT INTO dictionary (word) VALUES ('lorem'), ('ipsum'), ('dolor');";

fn fixture_scripts() -> BootstrapScripts {
    BootstrapScripts::new(SCHEMA_SQL, SEED_SQL)
}

fn file_config(path: &std::path::Path) -> StoreConfig {
    StoreConfig::new(format!("sqlite://{}", path.display()), "app", "secret")
}

fn dictionary_rows(path: &std::path::Path) -> i64 {
    let conn = Connection::open(path).unwrap();
    conn.query_row("SELECT COUNT(*) FROM dictionary;", [], |row| row.get(0))
        .unwrap()
}

#[test]
fn open_in_memory_creates_schema_and_seeds_rows() {
    let store = WordStore::open(&StoreConfig::in_memory(), &fixture_scripts()).unwrap();

    let values: Vec<String> = store
        .find_all()
        .unwrap()
        .into_iter()
        .map(|word| word.value)
        .collect();
    assert_eq!(values, ["lorem", "ipsum", "dolor"]);
}

#[test]
fn bundled_scripts_seed_a_non_empty_dictionary() {
    let store = WordStore::open(&StoreConfig::in_memory(), &BootstrapScripts::bundled()).unwrap();

    let words = store.find_all().unwrap();
    assert!(!words.is_empty());
    assert_eq!(words[0].value, "lorem");
    assert_eq!(store.count().unwrap(), words.len());
}

#[test]
fn reopening_file_database_does_not_seed_twice() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("words.db"));

    let mut first = WordStore::open(&config, &fixture_scripts()).unwrap();
    assert_eq!(first.count().unwrap(), 3);
    first.close().unwrap();

    let second = WordStore::open(&config, &fixture_scripts()).unwrap();
    assert_eq!(second.count().unwrap(), 3);
}

#[test]
fn seed_is_skipped_when_dictionary_already_has_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(SCHEMA_SQL).unwrap();
    conn.execute("INSERT INTO dictionary (word) VALUES ('existing');", [])
        .unwrap();
    drop(conn);

    let store = WordStore::open(&file_config(&path), &fixture_scripts()).unwrap();
    let words = store.find_all().unwrap();
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].value, "existing");
}

#[test]
fn unreachable_database_fails_at_connect_stage() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("missing").join("words.db"));

    let err = WordStore::open(&config, &fixture_scripts()).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Connect,
            ..
        }
    ));
}

#[test]
fn empty_url_fails_at_connect_stage() {
    let config = StoreConfig::new("", "", "");

    let err = WordStore::open(&config, &fixture_scripts()).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Connect,
            source: DbError::InvalidUrl(_),
        }
    ));
}

#[test]
fn malformed_schema_fails_at_schema_stage() {
    let scripts = BootstrapScripts::new("CREATE TABLE dictionary (", SEED_SQL);

    let err = WordStore::open(&StoreConfig::in_memory(), &scripts)
        .err()
        .unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Schema,
            ..
        }
    ));
}

#[test]
fn failing_seed_aborts_bootstrap_and_leaves_no_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");
    let scripts = BootstrapScripts::new(
        SCHEMA_SQL,
        "INSERT INTO dictionary (word) VALUES ('lorem');
         INSERT INTO dictionary (word) VALUES (NULL);",
    );

    let err = WordStore::open(&file_config(&path), &scripts).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Seed,
            ..
        }
    ));

    assert_eq!(dictionary_rows(&path), 0, "partial seed rows must be removed");
}

#[test]
fn seed_script_with_own_transaction_is_applied() {
    let scripts = BootstrapScripts::new(
        SCHEMA_SQL,
        "BEGIN;
         INSERT INTO dictionary (word) VALUES ('lorem');
         INSERT INTO dictionary (word) VALUES ('ipsum');
         COMMIT;",
    );

    let store = WordStore::open(&StoreConfig::in_memory(), &scripts).unwrap();
    let values: Vec<String> = store
        .find_all()
        .unwrap()
        .into_iter()
        .map(|word| word.value)
        .collect();
    assert_eq!(values, ["lorem", "ipsum"]);
}

#[test]
fn failing_seed_inside_own_transaction_is_rolled_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");
    let scripts = BootstrapScripts::new(
        SCHEMA_SQL,
        "BEGIN;
         INSERT INTO dictionary (word) VALUES ('lorem');
         INSERT INTO dictionary (word) VALUES (NULL);
         COMMIT;",
    );

    let err = WordStore::open(&file_config(&path), &scripts).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Seed,
            source: DbError::Sqlite(_),
        }
    ));
    assert_eq!(dictionary_rows(&path), 0);
}

#[test]
fn seed_leaving_transaction_open_fails_without_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.db");
    let scripts = BootstrapScripts::new(
        SCHEMA_SQL,
        "BEGIN; INSERT INTO dictionary (word) VALUES ('lorem');",
    );

    let err = WordStore::open(&file_config(&path), &scripts).err().unwrap();
    assert!(matches!(
        err,
        StoreError::Bootstrap {
            stage: BootstrapStage::Seed,
            source: DbError::UnterminatedTransaction,
        }
    ));
    assert_eq!(dictionary_rows(&path), 0);
}

#[test]
fn reopening_after_failed_seed_seeds_again() {
    let dir = tempfile::tempdir().unwrap();
    let config = file_config(&dir.path().join("words.db"));
    let broken = BootstrapScripts::new(
        SCHEMA_SQL,
        "INSERT INTO dictionary (word) VALUES ('lorem');
         INSERT INTO dictionary (word) VALUES (NULL);",
    );

    assert!(WordStore::open(&config, &broken).is_err());

    let store = WordStore::open(&config, &fixture_scripts()).unwrap();
    assert_eq!(store.count().unwrap(), 3);
}

#[test]
fn load_dir_reads_both_scripts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SCHEMA_FILE_NAME), SCHEMA_SQL).unwrap();
    std::fs::write(dir.path().join(SEED_FILE_NAME), SEED_SQL).unwrap();

    let scripts = BootstrapScripts::load_dir(dir.path()).unwrap();
    assert_eq!(scripts, fixture_scripts());
}

#[test]
fn load_dir_reports_missing_seed_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SCHEMA_FILE_NAME), SCHEMA_SQL).unwrap();

    let err = BootstrapScripts::load_dir(dir.path()).unwrap_err();
    match err {
        DbError::Io { path, .. } => assert_eq!(path, dir.path().join(SEED_FILE_NAME)),
        other => panic!("unexpected error: {other}"),
    }
}
