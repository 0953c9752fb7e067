use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage key [{0}] is not valid, use letters, digits, '-' or '_'")]
    InvalidKey(String),
    #[error("Storage I/O failed at [{path}]: {source}")]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error)
}
