use thiserror::Error;

/// A recoverable problem with a single CSV field.
///
/// Defects never fail a batch. The field falls back to its default and the
/// defect is reported alongside the parsed transactions.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldDefect {
    #[error("Amount is missing, defaulted to 0")]
    MissingAmount,
    #[error("Amount [{raw}] could not be read ({reason}), defaulted to 0")]
    InvalidAmount {
        raw: String,
        reason: String
    },
    #[error("Amount [{raw}] is outside the representable range, clamped to [{clamped}]")]
    AmountOutOfRange {
        raw: String,
        clamped: String
    },
    #[error("Amount [{raw}] has trailing text, only the leading number was kept")]
    TrailingAmountText {
        raw: String
    },
    #[error("Type [{raw}] is not recognised, defaulted to expense")]
    UnknownType {
        raw: String
    },
    #[error("Date [{raw}] could not be read, defaulted to the parse time")]
    InvalidDate {
        raw: String
    }
}
