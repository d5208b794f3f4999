use crate::commands::{not_found, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

pub fn run<S: RecordStore>(store: &S, id: i32) -> Result<CmdResult> {
    match store.get_by_id(id)? {
        Some(record) => Ok(CmdResult::default().with_listed_records(vec![record])),
        None => Ok(not_found(id)),
    }
}
