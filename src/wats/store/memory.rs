use super::{RecordStore, WriteOutcome};
use crate::error::{Result, WatsError};
use crate::model::AnimalRecord;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
///
/// Keyed by Tag ID, so listing order matches the SQLite table, where the Tag ID is the
/// rowid.
#[derive(Default)]
pub struct InMemoryStore {
    records: BTreeMap<i32, AnimalRecord>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryStore {
    fn list_all(&self) -> Result<Vec<AnimalRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn get_by_id(&self, id: i32) -> Result<Option<AnimalRecord>> {
        Ok(self.records.get(&id).cloned())
    }

    fn insert(&mut self, record: &AnimalRecord) -> Result<()> {
        if self.records.contains_key(&record.id()) {
            return Err(WatsError::DuplicateId(record.id()));
        }
        self.records.insert(record.id(), record.clone());
        Ok(())
    }

    fn update(&mut self, record: &AnimalRecord) -> Result<WriteOutcome> {
        match self.records.get_mut(&record.id()) {
            Some(existing) => {
                *existing = record.clone();
                Ok(WriteOutcome::Applied)
            }
            None => Ok(WriteOutcome::NotFound),
        }
    }

    fn delete(&mut self, id: i32) -> Result<WriteOutcome> {
        match self.records.remove(&id) {
            Some(_) => Ok(WriteOutcome::Applied),
            None => Ok(WriteOutcome::NotFound),
        }
    }

    fn average_weight(&self, species: &str) -> Result<Option<f64>> {
        let weights: Vec<f64> = self
            .records
            .values()
            .filter(|r| r.species() == species)
            .map(|r| r.weight())
            .collect();
        if weights.is_empty() {
            return Ok(None);
        }
        Ok(Some(weights.iter().sum::<f64>() / weights.len() as f64))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub fn animal(id: i32, species: &str, weight: f64) -> AnimalRecord {
        AnimalRecord::new(
            id,
            species,
            format!("{} {}", species, id),
            3,
            "Unknown",
            weight,
            "Healthy",
        )
        .unwrap()
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_animal(mut self, id: i32, species: &str, weight: f64) -> Self {
            self.store.insert(&animal(id, species, weight)).unwrap();
            self
        }

        /// Two lions (100kg, 150kg) and a tiger (200kg)
        pub fn with_big_cats(self) -> Self {
            self.with_animal(1, "Lion", 100.0)
                .with_animal(2, "Lion", 150.0)
                .with_animal(3, "Tiger", 200.0)
        }
    }
}
