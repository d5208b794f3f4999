use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::AnimalPatch;
use crate::model::AnimalRecord;
use crate::store::{RecordStore, WriteOutcome};

/// Replace the stored record that shares `record`'s Tag ID.
pub fn run<S: RecordStore>(store: &mut S, record: AnimalRecord) -> Result<CmdResult> {
    match store.update(&record)? {
        WriteOutcome::Applied => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Animal updated successfully: {}",
                record
            )));
            Ok(result.with_affected_records(vec![record]))
        }
        WriteOutcome::NotFound => Ok(not_found(record.id())),
    }
}

/// Load the current record, apply the patch on top of it, and store the result.
pub fn patch<S: RecordStore>(store: &mut S, id: i32, patch: &AnimalPatch) -> Result<CmdResult> {
    let Some(current) = store.get_by_id(id)? else {
        return Ok(not_found(id));
    };

    if patch.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!(
            "Nothing to update for Tag ID {}",
            id
        )));
        return Ok(result);
    }

    let updated = patch.apply(&current)?;
    run(store, updated)
}
