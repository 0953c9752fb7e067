use super::dashboard::{render_category_breakdown, render_dashboard, render_spending_over_time, render_stat_cards, render_summary_json};
use super::format::{format_currency, format_signed_amount, format_table_date, truncate};
use super::table::render_transactions_table;

use std::str::FromStr;

use anyhow::{anyhow, Result};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::aggregator::Summary;
use crate::models::{Transaction, TransactionType};
use crate::types::Amount;

fn create_transaction(day: u32, description: &str, category: &str, amount: &str, transaction_type: TransactionType) -> Result<Transaction> {
    Ok(Transaction {
        id: Uuid::new_v4(),
        date: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).single().ok_or_else(|| anyhow!("invalid date"))?,
        description: description.to_string(),
        category: category.to_string(),
        amount: Amount::from_str(amount)?,
        transaction_type
    })
}

fn sample_transactions() -> Result<Vec<Transaction>> {
    Ok(vec![
        create_transaction(5, "Groceries", "Food", "75", TransactionType::Expense)?,
        create_transaction(1, "Paycheck", "Salary", "100", TransactionType::Income)?,
        create_transaction(2, "Train", "Transport", "25", TransactionType::Expense)?,
    ])
}

fn render<F>(render_fn: F) -> Result<String>
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buffer = Vec::new();
    render_fn(&mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

#[test]
fn test_format_currency_places_sign_before_symbol() -> Result<()> {
    assert_eq!(format_currency(Decimal::from_str("20")?), "$20.00");
    assert_eq!(format_currency(Decimal::from_str("-30")?), "-$30.00");
    assert_eq!(format_currency(Decimal::from_str("1234.567")?), "$1234.57");
    assert_eq!(format_currency(Decimal::from_str("-0.001")?), "$0.00");

    Ok(())
}

#[test]
fn test_format_signed_amount_and_table_date() -> Result<()> {
    let transactions = sample_transactions()?;

    assert_eq!(format_signed_amount(&transactions[0]), "-$75.00");
    assert_eq!(format_signed_amount(&transactions[1]), "+$100.00");
    assert_eq!(format_table_date(&transactions[1].date), "Jan 01, 2024");

    Ok(())
}

#[test]
fn test_truncate_respects_character_width() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly-10", 10), "exactly-10");
    assert_eq!(truncate("much longer text", 8), "much lo…");
    assert_eq!(truncate("café au lait", 5), "café…");
}

#[test]
fn test_stat_cards_show_income_expense_and_balance() -> Result<()> {
    let summary = Summary::from_transactions(&sample_transactions()?);
    let text = render(|output| render_stat_cards(output, &summary))?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Total Income") && lines[0].ends_with("$100.00"));
    assert!(lines[1].starts_with("Total Expenses") && lines[1].ends_with("$100.00"));
    assert!(lines[2].starts_with("Balance") && lines[2].ends_with("$0.00"));

    Ok(())
}

#[test]
fn test_category_breakdown_lists_shares_in_first_occurrence_order() -> Result<()> {
    let summary = Summary::from_transactions(&sample_transactions()?);
    let text = render(|output| render_category_breakdown(output, &summary))?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Spending by Category");
    assert!(lines[1].contains("Food") && lines[1].contains("$75.00") && lines[1].ends_with("75.0%"));
    assert!(lines[2].contains("Transport") && lines[2].ends_with("25.0%"));

    Ok(())
}

#[test]
fn test_spending_over_time_is_chronological_with_scaled_bars() -> Result<()> {
    let summary = Summary::from_transactions(&sample_transactions()?);
    let text = render(|output| render_spending_over_time(output, &summary))?;
    let lines: Vec<&str> = text.lines().collect();

    assert!(lines[1].contains("2024-01-02") && lines[1].ends_with(&"#".repeat(10)));
    assert!(lines[2].contains("2024-01-05") && lines[2].ends_with(&"#".repeat(30)));

    Ok(())
}

#[test]
fn test_charts_show_placeholder_without_expenses() -> Result<()> {
    let transactions = vec![create_transaction(1, "Paycheck", "Salary", "100", TransactionType::Income)?];
    let summary = Summary::from_transactions(&transactions);

    let categories = render(|output| render_category_breakdown(output, &summary))?;
    let series = render(|output| render_spending_over_time(output, &summary))?;

    assert!(categories.contains("No expense data to display yet."));
    assert!(series.contains("No expense data to display yet."));

    Ok(())
}

#[test]
fn test_transactions_table_keeps_upload_order() -> Result<()> {
    let transactions = sample_transactions()?;
    let text = render(|output| render_transactions_table(output, &transactions))?;
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Transactions (3 records)");
    assert!(lines[3].starts_with("Jan 05, 2024") && lines[3].ends_with("-$75.00"));
    assert!(lines[4].contains("Paycheck") && lines[4].contains("income") && lines[4].ends_with("+$100.00"));
    assert!(lines[5].contains("Train"));

    Ok(())
}

#[test]
fn test_dashboard_shows_empty_state_without_transactions() -> Result<()> {
    let text = render(|output| render_dashboard(output, &[], &Summary::default()))?;

    assert!(text.starts_with("No transactions yet. Upload a CSV file to get started."));
    assert!(!text.contains("Total Income"));

    Ok(())
}

#[test]
fn test_dashboard_renders_every_section() -> Result<()> {
    let transactions = sample_transactions()?;
    let summary = Summary::from_transactions(&transactions);
    let text = render(|output| render_dashboard(output, &transactions, &summary))?;

    for section in ["Total Income", "Spending by Category", "Spending Over Time", "Transactions (3 records)"] {
        assert!(text.contains(section), "missing section [{section}]");
    }

    Ok(())
}

#[test]
fn test_summary_json_exposes_totals() -> Result<()> {
    let summary = Summary::from_transactions(&sample_transactions()?);
    let text = render(|output| render_summary_json(output, &summary))?;
    let json: serde_json::Value = serde_json::from_str(&text)?;

    assert_eq!(json["transaction_count"], 3);
    assert_eq!(json["category_totals"][0]["name"], "Food");
    assert_eq!(json["date_totals"][0]["date"], "2024-01-02");

    Ok(())
}
