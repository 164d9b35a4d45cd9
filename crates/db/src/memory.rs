//! In-memory [`RecordStore`] with the same ordering semantics as the CSV
//! store. Nothing touches the filesystem.

use std::sync::{Mutex, PoisonError};

use boatlog_core::record::BoatRecord;

use crate::error::StoreError;
use crate::store::RecordStore;

#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    records: Mutex<Vec<BoatRecord>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing records, e.g. to seed a test.
    pub fn with_records(records: Vec<BoatRecord>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for MemoryRecordStore {
    fn load_all(&self) -> Result<Vec<BoatRecord>, StoreError> {
        Ok(self
            .records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn append(&self, record: &BoatRecord) -> Result<(), StoreError> {
        self.records
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(record.clone());
        Ok(())
    }
}
