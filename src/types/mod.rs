mod amount;
mod errors;

pub use amount::{numeric_prefix, round_to_cents, Amount};
pub use errors::AmountError;

pub type TransactionId = uuid::Uuid;
