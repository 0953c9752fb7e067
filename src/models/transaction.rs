use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::TransactionType;
use crate::types::{Amount, TransactionId};

/// A single normalized income or expense record.
///
/// Built once from a CSV row and never mutated afterwards. The whole list is
/// replaced on every successful upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Random identifier assigned at parse time.
    pub id: TransactionId,
    /// Absolute point in time of the transaction.
    pub date: DateTime<Utc>,
    pub description: String,
    pub category: String,
    /// Magnitude only, the direction is carried by `transaction_type`.
    pub amount: Amount,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Calendar day of the transaction in UTC.
    pub fn day(&self) -> NaiveDate {
        self.date.date_naive()
    }
}
