//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry point
//! for every wats operation, whatever the UI.
//!
//! ## Failures are values
//!
//! Inside the library, stores and commands propagate errors with `?`. This facade is where
//! they cross into caller-visible behavior, so no method here returns `Err`:
//!
//! - listing that fails yields an empty list plus an error message
//! - lookups that find nothing yield no record plus a warning
//! - writes yield `failed = true`, with a warning for a missing Tag ID and an error (with
//!   the underlying cause) for a validation or storage fault
//! - an average over a species with no records yields no average plus an info message
//!
//! Callers branch on [`CmdResult::is_success`] and show `messages` to the user.
//!
//! ## Generic Over RecordStore
//!
//! `WatsApi<S: RecordStore>` is generic over the storage backend:
//! - Production: `WatsApi<SqliteStore>`
//! - Testing: `WatsApi<InMemoryStore>`
//!
//! The store is built once by the caller (after the database file is chosen) and handed
//! in; the API owns it from then on.

use crate::commands;
use crate::error::Result;
use crate::form::{AnimalForm, AnimalPatch};
use crate::model::AnimalRecord;
use crate::store::RecordStore;
use std::path::Path;
use tracing::warn;

pub struct WatsApi<S: RecordStore> {
    store: S,
}

impl<S: RecordStore> WatsApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn list_all(&self) -> CmdResult {
        settle("list", commands::list::run(&self.store))
    }

    pub fn get_by_id(&self, id: i32) -> CmdResult {
        settle("get", commands::get::run(&self.store, id))
    }

    pub fn insert(&mut self, record: AnimalRecord) -> CmdResult {
        settle("insert", commands::add::run(&mut self.store, record))
    }

    pub fn add_from_form(&mut self, form: AnimalForm) -> CmdResult {
        settle("insert", commands::add::from_form(&mut self.store, form))
    }

    pub fn update(&mut self, record: AnimalRecord) -> CmdResult {
        settle("update", commands::update::run(&mut self.store, record))
    }

    pub fn update_from_patch(&mut self, id: i32, patch: &AnimalPatch) -> CmdResult {
        settle("update", commands::update::patch(&mut self.store, id, patch))
    }

    pub fn delete(&mut self, id: i32) -> CmdResult {
        settle("delete", commands::delete::run(&mut self.store, id))
    }

    pub fn average_weight(&self, species: &str) -> CmdResult {
        settle("average", commands::average::run(&self.store, species))
    }
}

/// Create (or adopt) the tracking database at `path`. Needs no store.
pub fn init(path: &Path) -> CmdResult {
    settle("init", commands::init::run(path))
}

/// Show or change configuration stored in `config_dir`. Needs no store.
pub fn config(config_dir: &Path, action: ConfigAction) -> CmdResult {
    settle("config", commands::config::run(config_dir, action))
}

fn settle(operation: &str, outcome: Result<CmdResult>) -> CmdResult {
    match outcome {
        Ok(result) => result,
        Err(e) => {
            warn!(operation, error = %e, "operation failed");
            CmdResult::failure(CmdMessage::error(e.to_string()))
        }
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AverageWeight, CmdMessage, CmdResult, MessageLevel};
