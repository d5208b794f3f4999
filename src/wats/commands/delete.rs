use crate::commands::{not_found, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::{RecordStore, WriteOutcome};

/// Delete by Tag ID alone; the row is never decoded, so rows that no longer satisfy the
/// record rules can still be removed.
pub fn run<S: RecordStore>(store: &mut S, id: i32) -> Result<CmdResult> {
    match store.delete(id)? {
        WriteOutcome::Applied => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::success(format!(
                "Animal deleted successfully (Tag ID {})",
                id
            )));
            Ok(result)
        }
        WriteOutcome::NotFound => Ok(not_found(id)),
    }
}
