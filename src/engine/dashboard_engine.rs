use std::path::Path;

use tracing::{error, info, warn};

use crate::aggregator::Summary;
use crate::engine::errors::DashboardError;
use crate::models::Transaction;
use crate::parser::{CsvParser, RowDefect};
use crate::storage::{Storage, TransactionStore};

const ACCEPTED_EXTENSION: &str = "csv";

/// Result of a successful upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOutcome {
    /// Number of transactions now stored.
    pub imported: usize,
    /// Number of fields that fell back to a default.
    pub defects: usize
}

/// Ties the CSV parser to the persisted transaction list.
///
/// An upload either replaces the whole stored list or leaves it untouched.
/// Views are recomputed from the stored list on every call.
pub struct DashboardEngine<S: Storage> {
    store: TransactionStore<S>,
    parser: CsvParser
}

impl<S: Storage> DashboardEngine<S> {
    pub fn new(store: TransactionStore<S>) -> Self {
        Self {
            store,
            parser: CsvParser::new()
        }
    }

    #[cfg(test)]
    pub fn with_parser(mut self, parser: CsvParser) -> Self {
        self.parser = parser;
        self
    }

    /// Parses the CSV at `path` and, on success, stores it in place of the current list.
    pub async fn upload(&self, path: impl AsRef<Path>) -> Result<UploadOutcome, DashboardError> {
        let path = path.as_ref();

        let is_csv = path.extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| extension.eq_ignore_ascii_case(ACCEPTED_EXTENSION));

        if !is_csv {
            return Err(DashboardError::UnsupportedFile(path.to_path_buf()));
        }

        let report = match self.parser.parse_file(path).await {
            Ok(report) => report,
            Err(error) => {
                error!("CSV parsing failed for [{}], stored transactions left unchanged: {error}", path.display());
                return Err(error.into());
            }
        };

        for RowDefect { row, defect } in &report.defects {
            warn!("Row [{row}] of [{}]: {defect}", path.display());
        }

        self.store.replace(&report.transactions)?;

        let outcome = UploadOutcome {
            imported: report.transactions.len(),
            defects: report.defects.len()
        };

        info!("Imported [{}] transactions from [{}] with [{}] field defects", outcome.imported, path.display(), outcome.defects);

        Ok(outcome)
    }

    pub fn transactions(&self) -> Vec<Transaction> {
        self.store.load()
    }

    pub fn summary(&self) -> Summary {
        Summary::from_transactions(&self.transactions())
    }
}
