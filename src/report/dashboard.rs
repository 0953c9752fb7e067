use std::io::{self, Write};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::aggregator::Summary;
use crate::models::Transaction;
use crate::report::format::{format_currency, format_percentage, truncate};
use crate::report::table::render_transactions_table;

const LABEL_WIDTH: usize = 18;
const VALUE_WIDTH: usize = 14;
const BAR_WIDTH: usize = 30;
const BAR_CHARACTER: char = '#';
const NO_EXPENSES: &str = "No expense data to display yet.";

pub fn render_stat_cards(output: &mut impl Write, summary: &Summary) -> io::Result<()> {
    let cards = [
        ("Total Income", summary.total_income),
        ("Total Expenses", summary.total_expense),
        ("Balance", summary.balance),
    ];

    for (label, value) in cards {
        writeln!(output, "{label:<LABEL_WIDTH$}{:>VALUE_WIDTH$}", format_currency(value))?;
    }

    Ok(())
}

/// Category totals with their share of all expenses, the text form of a pie chart.
pub fn render_category_breakdown(output: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(output, "Spending by Category")?;

    if !summary.has_expenses() {
        return writeln!(output, "  {NO_EXPENSES}");
    }

    for category in &summary.category_totals {
        writeln!(
            output,
            "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}{:>9}",
            truncate(&category.name, LABEL_WIDTH - 2),
            format_currency(category.value),
            format_percentage(category.share_of(summary.total_expense))
        )?;
    }

    Ok(())
}

/// Daily expense totals with a bar scaled to the largest day.
pub fn render_spending_over_time(output: &mut impl Write, summary: &Summary) -> io::Result<()> {
    writeln!(output, "Spending Over Time")?;

    if summary.date_totals.is_empty() {
        return writeln!(output, "  {NO_EXPENSES}");
    }

    let peak = summary.date_totals.iter()
        .map(|total| total.value)
        .max()
        .unwrap_or(Decimal::ZERO);

    for total in &summary.date_totals {
        writeln!(
            output,
            "  {:<LABEL_WIDTH$}{:>VALUE_WIDTH$}  {}",
            total.date.format("%Y-%m-%d").to_string(),
            format_currency(total.value),
            bar(total.value, peak)
        )?;
    }

    Ok(())
}

pub fn render_empty_state(output: &mut impl Write) -> io::Result<()> {
    writeln!(output, "No transactions yet. Upload a CSV file to get started.")?;
    writeln!(output, "Expected columns: date, description, category, amount, type (income/expense)")
}

pub fn render_summary(output: &mut impl Write, summary: &Summary) -> io::Result<()> {
    render_stat_cards(output, summary)?;
    writeln!(output)?;
    render_category_breakdown(output, summary)?;
    writeln!(output)?;
    render_spending_over_time(output, summary)
}

/// The full view: summary and table, or the empty state when nothing is stored.
pub fn render_dashboard(output: &mut impl Write, transactions: &[Transaction], summary: &Summary) -> io::Result<()> {
    if transactions.is_empty() {
        return render_empty_state(output);
    }

    render_summary(output, summary)?;
    writeln!(output)?;
    render_transactions_table(output, transactions)
}

pub fn render_summary_json(output: &mut impl Write, summary: &Summary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *output, summary)?;
    writeln!(output)
}

fn bar(value: Decimal, peak: Decimal) -> String {
    let length = value
        .checked_div(peak)
        .and_then(|ratio| ratio.checked_mul(Decimal::from(BAR_WIDTH)))
        .and_then(|scaled| scaled.round().to_usize())
        .unwrap_or(0);

    let length = if value.is_zero() { 0 } else { length.max(1) };

    BAR_CHARACTER.to_string().repeat(length)
}
