//! Error types for the expand and collapse pipelines
//!
//! [`Violation`] describes why a single line was skipped; it never stops a run.
//! [`ExpandError`] and [`CollapseError`] are the conditions that do.

use thiserror::Error;

/// A per-line content problem. The line (or value) is skipped and processing continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// A cell split into more colon-separated values than allowed
    #[error("cell holds {count} values, more than {max}; line skipped: [{cell}]")]
    TooManyValues {
        cell: String,
        count: usize,
        max: usize,
    },

    /// A single value is longer than allowed
    #[error("value is longer than {max} characters; line skipped: [{value}]")]
    ValueTooLong { value: String, max: usize },

    /// A value contains bytes outside printable ASCII
    #[error("value contains non-printable or non-ASCII characters; line skipped: [{value}]")]
    NotPrintable { value: String },

    /// A collapser line did not split into a key and a value
    #[error("expected 2 columns, found {found}; line skipped: {line}")]
    ColumnCount { line: String, found: usize },

    /// A collapser key or value is too long or not printable ASCII
    #[error("cell is longer than {max} characters or not printable ASCII; line skipped: {line}")]
    InvalidCell { line: String, max: usize },

    /// The key already holds the maximum number of values
    #[error("key [{key}] already holds {max} values; value [{value}] dropped")]
    GroupFull {
        key: String,
        value: String,
        max: usize,
    },
}

/// Errors that abort an expand run
#[derive(Debug, Error)]
pub enum ExpandError {
    /// A line has more columns than allowed
    #[error("line {line} has {found} columns, more than the limit of {max}")]
    TooManyColumns {
        line: usize,
        found: usize,
        max: usize,
    },

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that abort a collapse run
#[derive(Debug, Error)]
pub enum CollapseError {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
