use std::io::{self, Write};

use crate::models::Transaction;
use crate::report::format::{format_signed_amount, format_table_date, truncate};

const DATE_WIDTH: usize = 12;
const DESCRIPTION_WIDTH: usize = 32;
const CATEGORY_WIDTH: usize = 18;
const TYPE_WIDTH: usize = 8;
const AMOUNT_WIDTH: usize = 14;

/// Writes every transaction in stored order, one per line.
pub fn render_transactions_table(output: &mut impl Write, transactions: &[Transaction]) -> io::Result<()> {
    writeln!(output, "Transactions ({} records)", transactions.len())?;
    writeln!(
        output,
        "{:<DATE_WIDTH$} {:<DESCRIPTION_WIDTH$} {:<CATEGORY_WIDTH$} {:<TYPE_WIDTH$} {:>AMOUNT_WIDTH$}",
        "Date", "Description", "Category", "Type", "Amount"
    )?;

    let rule_width = DATE_WIDTH + DESCRIPTION_WIDTH + CATEGORY_WIDTH + TYPE_WIDTH + AMOUNT_WIDTH + 4;
    writeln!(output, "{}", "-".repeat(rule_width))?;

    for transaction in transactions {
        writeln!(
            output,
            "{:<DATE_WIDTH$} {:<DESCRIPTION_WIDTH$} {:<CATEGORY_WIDTH$} {:<TYPE_WIDTH$} {:>AMOUNT_WIDTH$}",
            format_table_date(&transaction.date),
            truncate(&transaction.description, DESCRIPTION_WIDTH),
            truncate(&transaction.category, CATEGORY_WIDTH),
            transaction.transaction_type.to_string(),
            format_signed_amount(transaction)
        )?;
    }

    Ok(())
}
