//! Grouping of key/value rows into colon-joined cells

use std::io::{self, BufRead, Write};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::CollapseConfig;
use crate::error::{CollapseError, Violation};
use crate::input::LineReader;
use crate::model::{GroupTable, Insert, Row};
use crate::output::TsvWriter;
use crate::validate::{lossy, printable_cell};

/// Counters for one collapse run
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct CollapseStats {
    pub lines_read: usize,
    pub lines_skipped: usize,
    pub values_dropped: usize,
    pub groups_emitted: usize,
    /// Input was longer than the line limit and the rest was ignored
    pub truncated: bool,
}

/// Accumulates `key<TAB>value` lines into a [`GroupTable`]
#[derive(Debug, Clone)]
pub struct Collapser {
    config: CollapseConfig,
    groups: GroupTable,
}

impl Default for Collapser {
    fn default() -> Self {
        Self::new(CollapseConfig::default())
    }
}

impl Collapser {
    pub fn new(config: CollapseConfig) -> Self {
        Self {
            config,
            groups: GroupTable::new(config.max_group_values),
        }
    }

    /// Groups collected so far
    pub fn groups(&self) -> &GroupTable {
        &self.groups
    }

    /// Merge one line into the table.
    ///
    /// Returns the reason when the line is skipped or its value is dropped.
    pub fn push_line(&mut self, line: &[u8]) -> Result<(), Violation> {
        let row = Row::split(line);
        let (key, value) = match row.cells() {
            &[key, value] => (key, value),
            cells => {
                return Err(Violation::ColumnCount {
                    line: lossy(line).into_owned(),
                    found: cells.len(),
                })
            }
        };

        let max = self.config.max_cell_len;
        let (key, value) = match (printable_cell(key, max), printable_cell(value, max)) {
            (Some(key), Some(value)) => (key, value),
            _ => {
                return Err(Violation::InvalidCell {
                    line: lossy(line).into_owned(),
                    max,
                })
            }
        };

        match self.groups.insert(key, value) {
            Insert::Appended => Ok(()),
            Insert::Full => Err(Violation::GroupFull {
                key: key.to_string(),
                value: value.to_string(),
                max: self.config.max_group_values,
            }),
        }
    }

    /// Write one line per group in first-seen key order
    pub fn write_groups<W: Write>(&self, out: &mut TsvWriter<W>) -> io::Result<usize> {
        for (key, values) in self.groups.iter() {
            out.write_group(key, values)?;
        }
        Ok(self.groups.len())
    }

    /// Read `reader` to the line limit, then write the groups to `writer`.
    ///
    /// A read error still emits the groups collected before it, then returns the error.
    pub fn run<R: BufRead, W: Write>(
        mut self,
        reader: R,
        writer: W,
    ) -> Result<CollapseStats, CollapseError> {
        let mut lines = LineReader::new(reader);
        let mut stats = CollapseStats::default();

        let read = self.consume(&mut lines, &mut stats);

        let mut out = TsvWriter::new(writer);
        stats.groups_emitted = self.write_groups(&mut out)?;
        out.flush()?;
        read?;

        Ok(stats)
    }

    fn consume<R: BufRead>(
        &mut self,
        lines: &mut LineReader<R>,
        stats: &mut CollapseStats,
    ) -> Result<(), CollapseError> {
        while let Some((line_number, line)) = lines.next_line()? {
            if line_number > self.config.max_lines {
                warn!(
                    limit = self.config.max_lines,
                    "input exceeds {} lines; the rest is not processed", self.config.max_lines
                );
                stats.truncated = true;
                break;
            }
            stats.lines_read += 1;

            match self.push_line(line) {
                Ok(()) => debug!(line = line_number, "line grouped"),
                Err(violation @ Violation::GroupFull { .. }) => {
                    stats.values_dropped += 1;
                    warn!(line = line_number, "{}", violation);
                }
                Err(violation) => {
                    stats.lines_skipped += 1;
                    warn!(line = line_number, "{}", violation);
                }
            }
        }

        info!(
            lines = stats.lines_read,
            groups = self.groups.len(),
            "input consumed"
        );
        Ok(())
    }
}
