//! tsv-collapse - group key/value TSV rows read from stdin

use std::io::{self, BufWriter};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use tsvnorm::cli::DiagnosticArgs;
use tsvnorm::{logging, CollapseConfig, Collapser};

/// Collapse `key<TAB>value` lines from stdin into `key<TAB>v1:v2:...`
#[derive(Parser, Debug)]
#[command(name = "tsv-collapse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Lines read before the rest of the input is ignored
    #[arg(long, default_value_t = CollapseConfig::default().max_lines)]
    max_lines: usize,

    /// Maximum length of a key or value
    #[arg(long, default_value_t = CollapseConfig::default().max_cell_len)]
    max_cell_len: usize,

    /// Maximum values kept per key
    #[arg(long, default_value_t = CollapseConfig::default().max_group_values)]
    max_group_values: usize,

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

    let config = CollapseConfig::new()
        .with_max_lines(cli.max_lines)
        .with_max_cell_len(cli.max_cell_len)
        .with_max_group_values(cli.max_group_values);

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let stats = Collapser::new(config)
        .run(stdin, stdout)
        .context("Failed to collapse standard input")?;

    cli.diagnostics.report(&stats)
}
