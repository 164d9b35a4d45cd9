//! CSV-backed [`RecordStore`].
//!
//! The whole table lives in one UTF-8 CSV file with the header
//! `Last Name,First Name,Number of Pennies,Boat Volume`. Every append reads
//! the full table, adds a row and rewrites the file.
//!
//! Writes go to a sibling `.tmp` file which is then renamed over the backing
//! file. A mutex serializes read-modify-write within this process; separate
//! processes sharing the file can still lose each other's appends (last
//! writer wins).

use std::ffi::OsString;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use boatlog_core::record::{BoatRecord, COLUMNS};

use crate::error::StoreError;
use crate::store::RecordStore;

/// File-backed store of boat records.
#[derive(Debug)]
pub struct CsvRecordStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl CsvRecordStore {
    /// Open the store at `path`, creating a header-only file if absent.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self {
            path: path.into(),
            lock: Mutex::new(()),
        };
        store.ensure_exists()?;
        Ok(store)
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_exists(&self) -> Result<(), StoreError> {
        if self.path.exists() {
            return Ok(());
        }
        self.write_records(&[])?;
        tracing::info!(path = %self.path.display(), "Created empty backing file");
        Ok(())
    }

    fn read_records(&self) -> Result<Vec<BoatRecord>, StoreError> {
        let file = File::open(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);

        let headers = reader.headers().map_err(|e| self.read_error(e))?.clone();
        // A zero-byte file has no header row; treat it as an empty table.
        if headers.is_empty() {
            return Ok(Vec::new());
        }
        if headers.iter().ne(COLUMNS.iter().copied()) {
            return Err(self.corrupt(format!(
                "unexpected header {:?}, expected {COLUMNS:?}",
                headers.iter().collect::<Vec<_>>()
            )));
        }

        let mut records = Vec::new();
        for (index, row) in reader.deserialize::<BoatRecord>().enumerate() {
            // Line 1 is the header.
            let line = index + 2;
            let record = row.map_err(|e| match self.read_error(e) {
                StoreError::Corrupt { reason, .. } => self.corrupt(format!("line {line}: {reason}")),
                other => other,
            })?;
            record
                .check()
                .map_err(|e| self.corrupt(format!("line {line}: {e}")))?;
            records.push(record);
        }
        Ok(records)
    }

    fn write_records(&self, records: &[BoatRecord]) -> Result<(), StoreError> {
        let tmp_path = self.tmp_path();
        self.write_file(&tmp_path, records)
            .and_then(|()| fs::rename(&tmp_path, &self.path))
            .map_err(|source| {
                let _ = fs::remove_file(&tmp_path);
                StoreError::WriteFailed {
                    path: self.path.clone(),
                    source,
                }
            })
    }

    fn write_file(&self, path: &Path, records: &[BoatRecord]) -> io::Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }
        let file: File = writer.into_inner().map_err(|e| e.into_error())?;
        file.sync_all()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }

    fn read_error(&self, err: csv::Error) -> StoreError {
        if err.is_io_error() {
            return match err.into_kind() {
                csv::ErrorKind::Io(source) => StoreError::Read {
                    path: self.path.clone(),
                    source,
                },
                other => self.corrupt(format!("{other:?}")),
            };
        }
        self.corrupt(err.to_string())
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }
}

impl RecordStore for CsvRecordStore {
    fn load_all(&self) -> Result<Vec<BoatRecord>, StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ensure_exists()?;
        self.read_records()
    }

    fn append(&self, record: &BoatRecord) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.ensure_exists()?;

        let mut records = self.read_records()?;
        records.push(record.clone());
        self.write_records(&records)?;

        tracing::debug!(
            path = %self.path.display(),
            rows = records.len(),
            "Rewrote backing file",
        );
        Ok(())
    }
}
