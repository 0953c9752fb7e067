use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::error;

use crate::models::{Transaction, TransactionType};

/// Expense total for one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    pub value: Decimal
}

impl CategoryTotal {
    /// Percentage of `total` this category accounts for.
    pub fn share_of(&self, total: Decimal) -> Decimal {
        self.value
            .checked_div(total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
            .unwrap_or(Decimal::ZERO)
    }
}

/// Expense total for one UTC calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateTotal {
    pub date: NaiveDate,
    pub value: Decimal
}

/// Views derived from the full transaction list.
///
/// Never persisted. Built from scratch on every call so it always reflects
/// the list it was given.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Summary {
    pub transaction_count: usize,
    pub total_income: Decimal,
    pub total_expense: Decimal,
    /// `total_income - total_expense`, may be negative.
    pub balance: Decimal,
    /// Expense totals per category, in order of first appearance.
    pub category_totals: Vec<CategoryTotal>,
    /// Expense totals per day, ascending.
    pub date_totals: Vec<DateTotal>
}

impl Summary {
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let mut total_income = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;
        let mut category_totals: Vec<CategoryTotal> = Vec::new();
        let mut category_positions: HashMap<&str, usize> = HashMap::new();
        let mut daily_totals: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();

        for transaction in transactions {
            let amount = transaction.amount.value();

            match transaction.transaction_type {
                TransactionType::Income => match total_income.checked_add(amount) {
                    Some(new_total) => total_income = new_total,
                    None => error!("Summary accumulation error: Overflow, skipping income [{}]", transaction.id)
                },
                TransactionType::Expense => {
                    let position = category_positions.get(transaction.category.as_str()).copied();
                    let category_total = position.map_or(Decimal::ZERO, |position| category_totals[position].value);
                    let day = transaction.day();
                    let day_total = daily_totals.get(&day).copied().unwrap_or_default();

                    //NOTE: an expense is added to all three totals or to none of them
                    let staged = total_expense.checked_add(amount)
                        .zip(category_total.checked_add(amount))
                        .zip(day_total.checked_add(amount));

                    let Some(((new_expense, new_category), new_day)) = staged else {
                        error!("Summary accumulation error: Overflow, skipping expense [{}]", transaction.id);
                        continue;
                    };

                    total_expense = new_expense;
                    daily_totals.insert(day, new_day);

                    match position {
                        Some(position) => category_totals[position].value = new_category,
                        None => {
                            category_positions.insert(transaction.category.as_str(), category_totals.len());
                            category_totals.push(CategoryTotal { name: transaction.category.clone(), value: new_category });
                        }
                    }
                }
            }
        }

        let balance = total_income.checked_sub(total_expense).unwrap_or_else(|| {
            error!("Summary balance overflowed, reporting zero");
            Decimal::ZERO
        });

        let date_totals = daily_totals.into_iter()
            .map(|(date, value)| DateTotal { date, value })
            .collect();

        Self {
            transaction_count: transactions.len(),
            total_income,
            total_expense,
            balance,
            category_totals,
            date_totals
        }
    }

    pub fn has_expenses(&self) -> bool {
        !self.category_totals.is_empty()
    }
}
