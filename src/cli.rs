//! Command-line options shared by both binaries

use anyhow::Result;
use clap::Args;
use serde::Serialize;

/// Diagnostic flags
#[derive(Args, Debug, Clone, Default)]
pub struct DiagnosticArgs {
    /// Suppress warnings about skipped lines
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a JSON summary of the run to stderr
    #[arg(long)]
    pub stats: bool,
}

impl DiagnosticArgs {
    /// Write `stats` to stderr as JSON when `--stats` was given
    pub fn report<T: Serialize>(&self, stats: &T) -> Result<()> {
        if self.stats {
            eprintln!("{}", serde_json::to_string(stats)?);
        }
        Ok(())
    }
}
