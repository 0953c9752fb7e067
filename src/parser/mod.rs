mod coercion;
mod csv_parser;
mod errors;

pub use csv_parser::{CsvParser, RowDefect};
pub use errors::ParseError;
