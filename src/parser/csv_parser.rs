use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, StringRecord, Trim};
use tokio::task::spawn_blocking;
use tracing::debug;
use uuid::Uuid;

use crate::models::{FieldDefect, Transaction};
use crate::parser::coercion::{coerce_amount, coerce_category, coerce_date, coerce_description, coerce_type};
use crate::parser::errors::ParseError;

/// A field defect located by the zero-based index of the transaction it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct RowDefect {
    pub row: usize,
    pub defect: FieldDefect
}

/// Everything a single parse produced, in input order.
#[derive(Debug, Clone, Default)]
pub struct ParseReport {
    pub transactions: Vec<Transaction>,
    pub defects: Vec<RowDefect>
}

/// Columns recognised in the header row, by position.
#[derive(Debug, Default, Clone, Copy)]
struct ColumnMap {
    date: Option<usize>,
    description: Option<usize>,
    category: Option<usize>,
    amount: Option<usize>,
    kind: Option<usize>
}

impl ColumnMap {
    fn from_headers(headers: &StringRecord) -> Self {
        let mut columns = Self::default();

        for (index, name) in headers.iter().enumerate() {
            match name.trim_start_matches('\u{feff}').trim().to_lowercase().as_str() {
                "date" => columns.date = Some(index),
                "description" => columns.description = Some(index),
                "category" => columns.category = Some(index),
                "amount" => columns.amount = Some(index),
                "type" => columns.kind = Some(index),
                _ => {}
            }
        }

        columns
    }
}

/// Converts CSV text with a header row into transactions.
///
/// Individual fields never fail a parse, they degrade to defaults. Only a
/// failure to decode the CSV itself, or to finish the parse at all, is an error.
#[derive(Debug, Clone, Copy)]
pub struct CsvParser {
    clock: fn() -> DateTime<Utc>
}

impl Default for CsvParser {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvParser {
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Replaces the clock used for rows without a date.
    #[cfg(test)]
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    #[cfg(test)]
    pub fn parse_str(&self, content: &str) -> Result<ParseReport, ParseError> {
        self.parse_reader(content.as_bytes())
    }

    pub fn parse_reader<R: Read>(&self, input: R) -> Result<ParseReport, ParseError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::Headers)
            .flexible(true)
            .from_reader(input);

        let columns = ColumnMap::from_headers(reader.headers()?);
        let now = (self.clock)();
        let mut report = ParseReport::default();

        for result in reader.records() {
            let record = result?;

            if is_blank(&record) {
                debug!("Skipping blank CSV record at line [{:?}]", record.position().map(|position| position.line()));
                continue;
            }

            let row = report.transactions.len();
            let (transaction, defects) = map_record(&record, &columns, now);

            report.defects.extend(defects.into_iter().map(|defect| RowDefect { row, defect }));
            report.transactions.push(transaction);
        }

        Ok(report)
    }

    /// Reads and decodes a CSV file off the async runtime.
    ///
    /// Resolves exactly once, with either the complete batch or a single error.
    pub async fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseReport, ParseError> {
        let path = path.as_ref().to_path_buf();
        let parser = *self;

        spawn_blocking(move || {
            let file = File::open(&path).map_err(|source| ParseError::Open { path: path.clone(), source })?;
            parser.parse_reader(BufReader::new(file))
        })
        .await?
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn field<'r>(record: &'r StringRecord, column: Option<usize>) -> Option<&'r str> {
    column.and_then(|index| record.get(index))
}

fn map_record(record: &StringRecord, columns: &ColumnMap, now: DateTime<Utc>) -> (Transaction, Vec<FieldDefect>) {
    let (amount, amount_defect) = coerce_amount(field(record, columns.amount)).into_parts();
    let (transaction_type, type_defect) = coerce_type(field(record, columns.kind)).into_parts();
    let (date, date_defect) = coerce_date(field(record, columns.date), now).into_parts();

    let transaction = Transaction {
        id: Uuid::new_v4(),
        date,
        description: coerce_description(field(record, columns.description)),
        category: coerce_category(field(record, columns.category)),
        amount,
        transaction_type
    };

    let defects = [amount_defect, type_defect, date_defect].into_iter().flatten().collect();

    (transaction, defects)
}
