//! # Storage Layer
//!
//! This module defines the storage abstraction for wats. The [`RecordStore`] trait
//! is the sole gateway to persisted animal records.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite file
//!   - One `WildAnimals` table, one row per animal, keyed by Tag ID
//!   - A connection is opened for each operation and dropped before returning
//!   - No caching: every read goes to the file
//!   - `list_all` skips rows that break the record rules (logged), so one bad row written
//!     by another tool does not hide the rest
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Same semantics for duplicates, missing rows and averages
//!
//! ## Results
//!
//! Store methods return [`Result`] and propagate faults with `?`. Absence is not a fault:
//! `get_by_id` yields `Ok(None)`, and `update`/`delete` on a missing Tag ID yield
//! [`WriteOutcome::NotFound`]. Turning faults into user-facing outcomes is the API's job,
//! not the store's.

use crate::error::Result;
use crate::model::AnimalRecord;

pub mod memory;
pub mod sqlite;

/// What a keyed write actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Applied,
    NotFound,
}

impl WriteOutcome {
    pub fn from_rows(rows: usize) -> Self {
        if rows > 0 {
            WriteOutcome::Applied
        } else {
            WriteOutcome::NotFound
        }
    }
}

/// Abstract interface for animal record storage.
pub trait RecordStore {
    /// All records, in storage order
    fn list_all(&self) -> Result<Vec<AnimalRecord>>;

    /// The record with this Tag ID, if any
    fn get_by_id(&self, id: i32) -> Result<Option<AnimalRecord>>;

    /// Persist a new record. Fails if the Tag ID is taken.
    fn insert(&mut self, record: &AnimalRecord) -> Result<()>;

    /// Replace every mutable field of the record sharing `record.id()`
    fn update(&mut self, record: &AnimalRecord) -> Result<WriteOutcome>;

    /// Remove the record with this Tag ID
    fn delete(&mut self, id: i32) -> Result<WriteOutcome>;

    /// Mean weight over records whose species matches exactly, `None` when nothing matches
    fn average_weight(&self, species: &str) -> Result<Option<f64>>;
}
