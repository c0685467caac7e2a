use std::collections::HashMap;

use thiserror::Error;
use tracing::debug;

use crate::domain::entities::record::Record;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("no record with key {key:?} in cache")]
    NotFound { key: String },
}

/// Ordered primary-node records, keyed uniquely by `Record::key`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCache {
    records: Vec<Record>,
}

impl RecordCache {
    /// Replaces the whole cache with a fresh backend snapshot.
    ///
    /// The server appends a row on every write, so a repeated key carries
    /// its newest value. That value stays at the key's first position.
    pub fn load(&mut self, records: Vec<Record>) {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut loaded: Vec<Record> = Vec::with_capacity(records.len());
        for record in records {
            match positions.get(&record.key).copied() {
                Some(position) => {
                    debug!(key = %record.key, "superseding earlier runner record");
                    loaded[position] = record;
                }
                None => {
                    positions.insert(record.key.clone(), loaded.len());
                    loaded.push(record);
                }
            }
        }
        self.records = loaded;
    }

    /// Swaps the record with `updated.key` in place, keeping its position.
    pub fn replace(&mut self, updated: Record) -> Result<(), CacheError> {
        let Some(slot) = self
            .records
            .iter_mut()
            .find(|record| record.key == updated.key)
        else {
            return Err(CacheError::NotFound { key: updated.key });
        };
        *slot = updated;
        Ok(())
    }

    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    pub fn get(&self, key: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.key == key)
    }

}
