//! Expansion of colon-grouped cells into first normal form rows

use std::io::{BufRead, Write};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::ExpandConfig;
use crate::error::{ExpandError, Violation};
use crate::input::LineReader;
use crate::model::{split_cell, Combinations, Row, ValueSet};
use crate::output::TsvWriter;
use crate::validate::{is_printable_ascii, lossy, within_length};

/// Counters for one expand run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub rows_emitted: usize,
}

/// What became of a single input line
#[derive(Debug)]
pub enum LineOutcome<'a> {
    /// The line was valid; these are its output rows
    Expanded(Combinations<'a>),
    /// The line was rejected and produces no output
    Skipped(Violation),
}

/// Splits multi-valued cells and emits the cartesian product of each line
#[derive(Debug, Clone, Default)]
pub struct Expander {
    config: ExpandConfig,
}

impl Expander {
    pub fn new(config: ExpandConfig) -> Self {
        Self { config }
    }

    /// Split and validate one line.
    ///
    /// A column count over the limit is an error and should end the run; every
    /// other problem only skips this line.
    pub fn expand_line<'a>(
        &self,
        line: &'a [u8],
        line_number: usize,
    ) -> Result<LineOutcome<'a>, ExpandError> {
        let row = Row::split(line);
        if row.len() > self.config.max_columns {
            return Err(ExpandError::TooManyColumns {
                line: line_number,
                found: row.len(),
                max: self.config.max_columns,
            });
        }

        Ok(match self.value_sets(&row) {
            Ok(sets) => LineOutcome::Expanded(Combinations::new(sets)),
            Err(violation) => LineOutcome::Skipped(violation),
        })
    }

    /// Validate each cell left to right, stopping at the first violation
    fn value_sets<'a>(&self, row: &Row<'a>) -> Result<Vec<ValueSet<'a>>, Violation> {
        let mut sets = Vec::with_capacity(row.len());

        for &cell in row.cells() {
            let raw: Vec<&[u8]> = split_cell(cell).collect();
            if raw.len() > self.config.max_values {
                return Err(Violation::TooManyValues {
                    cell: lossy(cell).into_owned(),
                    count: raw.len(),
                    max: self.config.max_values,
                });
            }

            let mut values = Vec::with_capacity(raw.len());
            for value in raw {
                if !within_length(value, self.config.max_value_len) {
                    return Err(Violation::ValueTooLong {
                        value: lossy(value).into_owned(),
                        max: self.config.max_value_len,
                    });
                }
                let text = is_printable_ascii(value)
                    .then(|| std::str::from_utf8(value).ok())
                    .flatten()
                    .ok_or_else(|| Violation::NotPrintable {
                        value: lossy(value).into_owned(),
                    })?;
                values.push(text);
            }

            sets.push(ValueSet::new(values));
        }

        Ok(sets)
    }

    /// Expand every line of `reader` into `writer`.
    ///
    /// Output written before a fatal error is flushed before the error is returned.
    pub fn run<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: W,
    ) -> Result<ExpandStats, ExpandError> {
        let mut lines = LineReader::new(reader);
        let mut out = TsvWriter::new(writer);
        let mut stats = ExpandStats::default();

        let result = self.process(&mut lines, &mut out, &mut stats);
        let flushed = out.flush();
        result?;
        flushed?;

        Ok(stats)
    }

    fn process<R: BufRead, W: Write>(
        &self,
        lines: &mut LineReader<R>,
        out: &mut TsvWriter<W>,
        stats: &mut ExpandStats,
    ) -> Result<(), ExpandError> {
        while let Some((line_number, line)) = lines.next_line()? {
            stats.lines_read += 1;

            match self.expand_line(line, line_number)? {
                LineOutcome::Expanded(combinations) => {
                    let mut emitted = 0;
                    for combination in combinations {
                        out.write_row(&combination)?;
                        emitted += 1;
                    }
                    stats.rows_emitted += emitted;
                    debug!(line = line_number, rows = emitted, "line expanded");
                }
                LineOutcome::Skipped(violation) => {
                    stats.lines_skipped += 1;
                    warn!(line = line_number, "{}", violation);
                }
            }
        }

        Ok(())
    }
}
