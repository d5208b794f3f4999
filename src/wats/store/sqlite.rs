use super::{RecordStore, WriteOutcome};
use crate::error::{Result, WatsError};
use crate::model::AnimalRecord;
use rusqlite::{ffi, params, Connection, ErrorCode, OpenFlags, OptionalExtension, Row};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

const TABLE: &str = "WildAnimals";

const CREATE_TABLE: &str = "CREATE TABLE IF NOT EXISTS WildAnimals (
    id INTEGER PRIMARY KEY,
    species TEXT NOT NULL,
    name TEXT NOT NULL,
    age INTEGER NOT NULL,
    gender TEXT NOT NULL,
    weight REAL NOT NULL,
    healthStatus TEXT NOT NULL
)";

const SELECT_COLUMNS: &str =
    "SELECT id, species, name, age, gender, weight, healthStatus FROM WildAnimals";

/// SQLite-backed record storage.
///
/// Holds only the database path. Every operation opens its own connection through
/// [`SqliteStore::connect`] and drops it before returning, so nothing stays open between
/// calls and nothing is cached.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

/// Raw column values, before the record rules are applied.
type RawRow = (i32, String, String, i32, String, f64, String);

impl SqliteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a new tracking database at `path` (or adopt an existing one) and return a
    /// store for it.
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(&path).map_err(|e| WatsError::unavailable(&path, e))?;
        conn.busy_timeout(Duration::ZERO)
            .map_err(|e| WatsError::unavailable(&path, e))?;
        conn.execute_batch(CREATE_TABLE)
            .map_err(|e| WatsError::unavailable(&path, e))?;
        debug!(path = %path.display(), "initialized animal table");

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a connection to the existing database file.
    ///
    /// Never creates the file. Missing, non-SQLite, locked, or table-less files all fail
    /// with [`WatsError::StorageUnavailable`].
    pub fn connect(&self) -> Result<Connection> {
        if !self.path.is_file() {
            return Err(WatsError::unavailable(&self.path, "no such database file"));
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| WatsError::unavailable(&self.path, e))?;
        // rusqlite opens with a 5s busy handler; a locked file should fail at once
        conn.busy_timeout(Duration::ZERO)
            .map_err(|e| WatsError::unavailable(&self.path, e))?;

        // Opening is lazy; touching the schema is what surfaces corrupt or locked files.
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                params![TABLE],
                |row| row.get(0),
            )
            .map_err(|e| WatsError::unavailable(&self.path, e))?;
        if tables == 0 {
            return Err(WatsError::unavailable(
                &self.path,
                format!("missing {} table", TABLE),
            ));
        }

        Ok(conn)
    }

    fn with_connection<T>(&self, op: impl FnOnce(&Connection) -> Result<T>) -> Result<T> {
        let conn = self.connect()?;
        let result = op(&conn);
        if let Err(e) = &result {
            warn!(path = %self.path.display(), error = %e, "database operation failed");
        }
        result
    }
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawRow> {
    Ok((
        row.get("id")?,
        row.get("species")?,
        row.get("name")?,
        row.get("age")?,
        row.get("gender")?,
        row.get("weight")?,
        row.get("healthStatus")?,
    ))
}

fn into_record(raw: RawRow) -> Result<AnimalRecord> {
    let (id, species, name, age, gender, weight, health_status) = raw;
    AnimalRecord::new(id, species, name, age, gender, weight, health_status)
        .map_err(|e| WatsError::Storage(format!("invalid row for Tag ID {}: {}", id, e)))
}

impl RecordStore for SqliteStore {
    fn list_all(&self) -> Result<Vec<AnimalRecord>> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(SELECT_COLUMNS)?;
            let rows = stmt
                .query_map([], read_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            debug!(count = rows.len(), "listed animals");
            let records = rows
                .into_iter()
                .filter_map(|raw| match into_record(raw) {
                    Ok(record) => Some(record),
                    Err(e) => {
                        warn!(error = %e, "skipping unreadable row");
                        None
                    }
                })
                .collect();
            Ok(records)
        })
    }

    fn get_by_id(&self, id: i32) -> Result<Option<AnimalRecord>> {
        self.with_connection(|conn| {
            let raw = conn
                .query_row(
                    &format!("{} WHERE id = ?1", SELECT_COLUMNS),
                    params![id],
                    read_row,
                )
                .optional()?;
            debug!(id, found = raw.is_some(), "looked up animal");
            raw.map(into_record).transpose()
        })
    }

    fn insert(&mut self, record: &AnimalRecord) -> Result<()> {
        self.with_connection(|conn| {
            let inserted = conn.execute(
                "INSERT INTO WildAnimals (id, species, name, age, gender, weight, healthStatus)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    record.id(),
                    record.species(),
                    record.name(),
                    record.age(),
                    record.gender(),
                    record.weight(),
                    record.health_status(),
                ],
            );
            match inserted {
                Ok(_) => {
                    debug!(id = record.id(), "inserted animal");
                    Ok(())
                }
                Err(rusqlite::Error::SqliteFailure(err, _))
                    if err.code == ErrorCode::ConstraintViolation
                        && matches!(
                            err.extended_code,
                            ffi::SQLITE_CONSTRAINT_PRIMARYKEY | ffi::SQLITE_CONSTRAINT_UNIQUE
                        ) =>
                {
                    Err(WatsError::DuplicateId(record.id()))
                }
                Err(e) => Err(e.into()),
            }
        })
    }

    fn update(&mut self, record: &AnimalRecord) -> Result<WriteOutcome> {
        self.with_connection(|conn| {
            let rows = conn.execute(
                "UPDATE WildAnimals
                 SET species = ?1, name = ?2, age = ?3, gender = ?4, weight = ?5, healthStatus = ?6
                 WHERE id = ?7",
                params![
                    record.species(),
                    record.name(),
                    record.age(),
                    record.gender(),
                    record.weight(),
                    record.health_status(),
                    record.id(),
                ],
            )?;
            debug!(id = record.id(), rows, "updated animal");
            Ok(WriteOutcome::from_rows(rows))
        })
    }

    fn delete(&mut self, id: i32) -> Result<WriteOutcome> {
        self.with_connection(|conn| {
            let rows = conn.execute("DELETE FROM WildAnimals WHERE id = ?1", params![id])?;
            debug!(id, rows, "deleted animal");
            Ok(WriteOutcome::from_rows(rows))
        })
    }

    fn average_weight(&self, species: &str) -> Result<Option<f64>> {
        self.with_connection(|conn| {
            // AVG over zero rows is NULL
            let average: Option<f64> = conn.query_row(
                "SELECT AVG(weight) FROM WildAnimals WHERE species = ?1",
                params![species],
                |row| row.get(0),
            )?;
            debug!(species, ?average, "averaged weight");
            Ok(average)
        })
    }
}
