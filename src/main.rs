mod aggregator;
mod engine;
mod models;
mod parser;
mod report;
mod storage;
mod types;

use std::io::{stderr, stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crate::engine::{DashboardEngine, DashboardError};
use crate::storage::{FileStorage, TransactionStore};

const DATA_DIR_NAME: &str = ".finance-dashboard";
const PARSE_FAILURE_MESSAGE: &str = "Failed to parse CSV. Check the format.";

#[derive(Parser, Debug)]
#[command(name = "finance-dashboard", version, about = "Personal finance dashboard for CSV transaction exports")]
struct Cli {
    /// Directory holding the stored transactions (default: ~/.finance-dashboard)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log level written to stderr: error, warn, info, debug, trace
    #[arg(long, global = true, default_value = "error")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a CSV file and replace the stored transactions with it
    Upload {
        /// CSV with columns date, description, category, amount, type
        file: PathBuf,
    },

    /// Show income, expense and balance with both spending series
    Summary {
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the stored transactions in upload order
    Transactions,

    /// Show the summary followed by the transaction table
    Dashboard,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(parse_log_level(&cli.log_level));

    let data_dir = resolve_data_dir(cli.data_dir)?;
    let storage = Arc::new(FileStorage::new(&data_dir)?);
    let engine = DashboardEngine::new(TransactionStore::new(storage));

    let mut output = BufWriter::new(stdout());

    match cli.command {
        Command::Upload { file } => {
            let timer = Instant::now();

            match engine.upload(&file).await {
                Ok(outcome) => {
                    info!("Upload finished in: {:?}", timer.elapsed());
                    writeln!(output, "Imported {} transactions", outcome.imported)?;
                }
                Err(DashboardError::Parse(_)) => {
                    eprintln!("{PARSE_FAILURE_MESSAGE}");
                    exit(1);
                }
                Err(error) => return Err(error.into()),
            }
        }
        Command::Summary { json } => {
            let summary = engine.summary();

            if json {
                report::render_summary_json(&mut output, &summary)?;
            } else {
                report::render_summary(&mut output, &summary)?;
            }
        }
        Command::Transactions => {
            report::render_transactions_table(&mut output, &engine.transactions())?;
        }
        Command::Dashboard => {
            let transactions = engine.transactions();
            let summary = aggregator::Summary::from_transactions(&transactions);

            report::render_dashboard(&mut output, &transactions, &summary)?;
        }
    }

    output.flush()?;

    Ok(())
}

fn resolve_data_dir(data_dir: Option<PathBuf>) -> Result<PathBuf> {
    match data_dir {
        Some(data_dir) => Ok(data_dir),
        None => {
            let home = std::env::var("HOME").context("HOME is not set, pass --data-dir")?;
            Ok(PathBuf::from(home).join(DATA_DIR_NAME))
        }
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the reports, so logs go to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
