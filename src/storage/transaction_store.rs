use std::sync::Arc;

use tracing::warn;

use crate::models::Transaction;
use crate::storage::{Storage, StorageError};

/// Slot holding the current transaction list.
pub const TRANSACTIONS_KEY: &str = "pf-transactions";

/// Reads and replaces the persisted transaction list as a single JSON value.
pub struct TransactionStore<S: Storage> {
    storage: Arc<S>,
    key: String
}

impl<S: Storage> TransactionStore<S> {
    pub fn new(storage: Arc<S>) -> Self {
        Self::with_key(storage, TRANSACTIONS_KEY)
    }

    pub fn with_key(storage: Arc<S>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into()
        }
    }

    /// Loads the stored list.
    ///
    /// A missing slot, an unreadable slot or malformed JSON all yield an empty
    /// list. Problems are logged, never returned.
    pub fn load(&self) -> Vec<Transaction> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(error) => {
                warn!("Stored transactions under [{}] could not be read, starting empty: {error}", self.key);
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(transactions) => transactions,
            Err(error) => {
                warn!("Stored transactions under [{}] are malformed, starting empty: {error}", self.key);
                Vec::new()
            }
        }
    }

    /// Overwrites the stored list with `transactions`.
    pub fn replace(&self, transactions: &[Transaction]) -> Result<(), StorageError> {
        let value = serde_json::to_string(transactions)?;
        self.storage.set(&self.key, value)
    }
}
