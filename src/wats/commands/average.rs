use crate::commands::{AverageWeight, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::RecordStore;

/// Mean weight for `species`. Matching is exact and case-sensitive; a species with no
/// records yields no average rather than zero.
pub fn run<S: RecordStore>(store: &S, species: &str) -> Result<CmdResult> {
    match store.average_weight(species)? {
        Some(mean) => Ok(CmdResult::default().with_average(AverageWeight {
            species: species.to_string(),
            mean,
        })),
        None => {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info(format!(
                "No animals found for species: {}",
                species
            )));
            Ok(result)
        }
    }
}
