//! Lenient field readers for CSV rows.
//!
//! Every reader returns a definite value. A field that cannot be read falls
//! back to its default and carries a `FieldDefect` so the caller can report it.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::{FieldDefect, TransactionType, UNCATEGORIZED};
use crate::types::{numeric_prefix, Amount, AmountError};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// A coerced field value plus the defect hit while reading it, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct Coerced<T> {
    pub value: T,
    pub defect: Option<FieldDefect>
}

impl<T> Coerced<T> {
    pub fn clean(value: T) -> Self {
        Self { value, defect: None }
    }

    pub fn defective(value: T, defect: FieldDefect) -> Self {
        Self { value, defect: Some(defect) }
    }

    pub fn into_parts(self) -> (T, Option<FieldDefect>) {
        (self.value, self.defect)
    }
}

/// Reads the leading number of the field and takes its absolute value.
pub fn coerce_amount(raw: Option<&str>) -> Coerced<Amount> {
    let Some(raw) = raw.filter(|value| !value.trim().is_empty()) else {
        return Coerced::defective(Amount::ZERO, FieldDefect::MissingAmount);
    };

    let trimmed = raw.trim();
    let prefix = numeric_prefix(trimmed);

    if prefix.is_empty() {
        return Coerced::defective(Amount::ZERO, FieldDefect::InvalidAmount {
            raw: raw.to_string(),
            reason: "no leading number".to_string()
        });
    }

    match prefix.parse::<Amount>() {
        Ok(amount) if prefix.len() == trimmed.len() => Coerced::clean(amount),
        Ok(amount) => Coerced::defective(amount, FieldDefect::TrailingAmountText { raw: raw.to_string() }),
        Err(AmountError::OutOfRange(_)) => {
            let clamped = clamp_out_of_range(prefix);
            Coerced::defective(clamped, FieldDefect::AmountOutOfRange {
                raw: raw.to_string(),
                clamped: clamped.to_string()
            })
        }
        Err(error) => Coerced::defective(Amount::ZERO, FieldDefect::InvalidAmount {
            raw: raw.to_string(),
            reason: error.to_string()
        })
    }
}

//NOTE: the prefix is already known to be numeric, so the float reading only decides which end it overflowed
fn clamp_out_of_range(prefix: &str) -> Amount {
    match prefix.parse::<f64>() {
        Ok(magnitude) if magnitude.abs() >= 1.0 => Amount::MAX,
        _ => Amount::ZERO
    }
}

/// `income` and `in` (any case) are income, everything else is an expense.
pub fn coerce_type(raw: Option<&str>) -> Coerced<TransactionType> {
    let normalized = raw.unwrap_or_default().to_lowercase();

    match normalized.as_str() {
        "income" | "in" => Coerced::clean(TransactionType::Income),
        "expense" | "" => Coerced::clean(TransactionType::Expense),
        _ => Coerced::defective(TransactionType::Expense, FieldDefect::UnknownType {
            raw: raw.unwrap_or_default().to_string()
        })
    }
}

/// Reads a timestamp, falling back to `now` when the field is absent or unreadable.
///
/// Values without an explicit offset are taken as UTC.
pub fn coerce_date(raw: Option<&str>, now: DateTime<Utc>) -> Coerced<DateTime<Utc>> {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return Coerced::clean(now);
    };

    match parse_timestamp(raw) {
        Some(date) => Coerced::clean(date),
        None => Coerced::defective(now, FieldDefect::InvalidDate { raw: raw.to_string() })
    }
}

pub fn coerce_description(raw: Option<&str>) -> String {
    raw.unwrap_or_default().to_string()
}

pub fn coerce_category(raw: Option<&str>) -> String {
    match raw {
        Some(category) if !category.is_empty() => category.to_string(),
        _ => UNCATEGORIZED.to_string()
    }
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc3339(value) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATETIME_FORMATS {
        if let Ok(date) = NaiveDateTime::parse_from_str(value, format) {
            return Some(date.and_utc());
        }
    }

    DATE_FORMATS.iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|date| date.and_utc())
}
