use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AmountError {
    #[error("Amount error: Value is an empty string")]
    Empty,
    #[error("Amount error: Value is not a number [{0}]")]
    InvalidFormat(String),
    #[error("Amount error: Value is out of range [{0}]")]
    OutOfRange(String),
    #[error("Amount error: Stored amount is negative [{0}]")]
    Negative(String)
}
