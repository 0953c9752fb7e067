mod errors;
mod file_storage;
#[cfg(test)]
mod memory_storage;
mod transaction_store;

pub use errors::StorageError;
pub use file_storage::FileStorage;
pub use transaction_store::TransactionStore;

#[cfg(test)]
pub use memory_storage::MemoryStorage;
#[cfg(test)]
pub use transaction_store::TRANSACTIONS_KEY;

/// A string key/value store holding serialized state in named slots.
pub trait Storage: Send + Sync + 'static {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: String) -> Result<(), StorageError>;
}
