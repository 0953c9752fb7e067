use std::path::PathBuf;

use thiserror::Error;

use crate::parser::ParseError;
use crate::storage::StorageError;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Only .csv files can be uploaded, got [{}]", .0.display())]
    UnsupportedFile(PathBuf),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Storage(#[from] StorageError)
}
