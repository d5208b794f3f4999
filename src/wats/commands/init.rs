use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::sqlite::SqliteStore;
use std::path::Path;

/// Create the tracking database at `path`, or confirm an existing one.
pub fn run(path: &Path) -> Result<CmdResult> {
    let existed = path.exists();
    let store = SqliteStore::create(path)?;

    let mut result = CmdResult::default();
    let verb = if existed { "Using existing" } else { "Initialized" };
    result.add_message(CmdMessage::success(format!(
        "{} animal database at {}",
        verb,
        store.path().display()
    )));
    Ok(result.with_database(store.path().to_path_buf()))
}
