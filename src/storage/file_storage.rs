use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use tempfile::Builder;
use tracing::debug;

use crate::storage::{Storage, StorageError};

const SLOT_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = ".tmp";

/// Keeps each slot in its own `<key>.json` file inside one directory.
///
/// Every write goes to its own uniquely named temporary sibling, which is then
/// renamed into place. A reader sees either the previous value or a new one in full.
#[derive(Debug, Clone)]
pub struct FileStorage {
    directory: PathBuf
}

impl FileStorage {
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();
        fs::create_dir_all(&directory).map_err(|source| StorageError::Io { path: directory.clone(), source })?;

        Ok(Self { directory })
    }

    pub fn slot_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let is_valid = !key.is_empty()
            && key.chars().all(|character| character.is_ascii_alphanumeric() || character == '-' || character == '_');

        if !is_valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.directory.join(format!("{key}.{SLOT_EXTENSION}")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(key)?;

        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io { path, source })
        }
    }

    fn set(&self, key: &str, value: String) -> Result<(), StorageError> {
        let path = self.slot_path(key)?;
        let io_error = |source| StorageError::Io { path: path.clone(), source };

        let mut staged = Builder::new()
            .prefix(&format!(".{key}."))
            .suffix(TMP_SUFFIX)
            .tempfile_in(&self.directory)
            .map_err(io_error)?;

        staged.write_all(value.as_bytes()).map_err(io_error)?;
        staged.as_file().sync_all().map_err(io_error)?;
        staged.persist(&path).map_err(|error| io_error(error.error))?;

        debug!("Storage slot [{key}] written to [{}]", path.display());

        Ok(())
    }
}
