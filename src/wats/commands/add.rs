use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::form::AnimalForm;
use crate::model::AnimalRecord;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &mut S, record: AnimalRecord) -> Result<CmdResult> {
    store.insert(&record)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Animal added successfully: {}",
        record
    )));
    Ok(result.with_affected_records(vec![record]))
}

/// Validate raw entry text, then insert. Invalid input never reaches the store.
pub fn from_form<S: RecordStore>(store: &mut S, form: AnimalForm) -> Result<CmdResult> {
    let record = form.into_record()?;
    run(store, record)
}
