//! CLI application that extracts case-file fields from a folder of PDFs.

mod config;
mod output;

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use extrator_core::{FolderProcessor, PdfTextSource, RuleBasedParser};

/// Extract process number, filing date, claimant and registration number from PDFs
#[derive(Parser)]
#[command(name = "extrator")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Folder containing the PDF files
    #[arg(short, long)]
    input: PathBuf,

    /// Output file (.csv, .xlsx/.xls or .json)
    #[arg(short, long)]
    output: PathBuf,

    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write filing dates as YYYY-MM-DD when they parse
    #[arg(long)]
    iso_dates: bool,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity; RUST_LOG takes precedence
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.iso_dates {
        config.extraction.normalize_dates = true;
    }

    if !cli.input.is_dir() {
        error!("Invalid input folder: {}", cli.input.display());
        return Ok(());
    }

    let parser = RuleBasedParser::from_config(&config.extraction)?;
    let source = PdfTextSource::with_config(config.pdf.clone());
    let processor = FolderProcessor::new(source, parser).with_config(config.pdf.clone());

    let table = processor.process(&cli.input)?;

    output::write_table(&table, &cli.output, &config.output)?;
    info!(
        "Saved: {} (rows: {}, failed: {})",
        cli.output.display(),
        table.len(),
        table.failed_count()
    );

    Ok(())
}
