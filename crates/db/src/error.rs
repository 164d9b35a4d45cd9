use std::path::PathBuf;

/// Failures of the backing store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backing file exists but does not hold a valid table.
    #[error("Backing file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    /// The backing file could not be read.
    #[error("Failed to read backing file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table could not be (re)written.
    #[error("Failed to write backing file {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
