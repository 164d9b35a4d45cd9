//! Record persistence for the boat entry form.
//!
//! [`RecordStore`] is the seam the form controller talks to. Production uses
//! [`CsvRecordStore`] over the backing file; tests inject
//! [`MemoryRecordStore`].

pub mod csv_store;
pub mod error;
pub mod memory;
pub mod store;

pub use csv_store::CsvRecordStore;
pub use error::StoreError;
pub use memory::MemoryRecordStore;
pub use store::RecordStore;

/// Verify the store is readable. Returns the current record count.
pub fn health_check(store: &dyn RecordStore) -> Result<usize, StoreError> {
    store.load_all().map(|records| records.len())
}
