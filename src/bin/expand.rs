//! tsv-expand - expand colon-grouped TSV cells into one row per combination

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsvnorm::cli::DiagnosticArgs;
use tsvnorm::input::open_path;
use tsvnorm::{logging, ExpandConfig, Expander};

/// Expand colon-separated cells of a TSV file into first normal form rows
#[derive(Parser, Debug)]
#[command(name = "tsv-expand")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input TSV file ('-' reads standard input)
    file: PathBuf,

    /// Maximum columns per line; a longer line aborts the run
    #[arg(long, default_value_t = ExpandConfig::default().max_columns)]
    max_columns: usize,

    /// Maximum colon-separated values in one cell
    #[arg(long, default_value_t = ExpandConfig::default().max_values)]
    max_values: usize,

    /// Maximum length of a single value
    #[arg(long, default_value_t = ExpandConfig::default().max_value_len)]
    max_value_len: usize,

    #[command(flatten)]
    diagnostics: DiagnosticArgs,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.diagnostics.quiet);

    let config = ExpandConfig::new()
        .with_max_columns(cli.max_columns)
        .with_max_values(cli.max_values)
        .with_max_value_len(cli.max_value_len);

    let reader = open_path(&cli.file)?;
    let stdout = BufWriter::new(io::stdout().lock());

    let stats = Expander::new(config)
        .run(reader, stdout)
        .with_context(|| format!("Failed to expand {}", cli.file.display()))?;

    cli.diagnostics.report(&stats)
}
