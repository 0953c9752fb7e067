//! Plain-text and JSON views of the stored transactions.

mod dashboard;
mod format;
mod table;
#[cfg(test)]
mod tests;

pub use dashboard::{render_dashboard, render_summary, render_summary_json};
pub use table::render_transactions_table;
