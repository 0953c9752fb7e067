use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unable to open CSV at path [{path}]: {source}")]
    Open {
        path: PathBuf,
        source: io::Error
    },
    #[error("CSV decoding failed: {0}")]
    Decode(#[from] csv::Error),
    #[error("CSV parsing task did not complete: {0}")]
    Task(#[from] JoinError)
}
