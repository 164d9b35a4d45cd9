use boatlog_core::record::BoatRecord;

use crate::error::StoreError;

/// Ordered, append-only collection of boat records.
///
/// Insertion order is preserved. Implementations are shared across request
/// handlers, so they must be `Send + Sync`.
pub trait RecordStore: Send + Sync {
    /// Return every record in insertion order.
    fn load_all(&self) -> Result<Vec<BoatRecord>, StoreError>;

    /// Add one record at the end. Duplicates are kept as separate rows.
    fn append(&self, record: &BoatRecord) -> Result<(), StoreError>;
}
