use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::Transaction;
use crate::types::round_to_cents;

const ELLIPSIS: char = '…';

/// `$1234.50`, or `-$1234.50` for negative values.
pub fn format_currency(value: Decimal) -> String {
    let rounded = round_to_cents(value);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };

    format!("{sign}${:.2}", rounded.abs())
}

/// Signed table amount: `-$` for expenses, `+$` for income.
pub fn format_signed_amount(transaction: &Transaction) -> String {
    let sign = if transaction.is_expense() { "-" } else { "+" };

    format!("{sign}${}", transaction.amount)
}

/// `Jan 05, 2024`
pub fn format_table_date(date: &DateTime<Utc>) -> String {
    date.format("%b %d, %Y").to_string()
}

pub fn format_percentage(value: Decimal) -> String {
    format!("{:.1}%", value.round_dp(1))
}

/// Shortens `value` to at most `width` characters.
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }

    let mut truncated: String = value.chars().take(width.saturating_sub(1)).collect();
    truncated.push(ELLIPSIS);
    truncated
}
