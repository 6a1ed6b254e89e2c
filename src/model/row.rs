//! Rows and cells as read from one input line

/// Column delimiter
pub const TAB: u8 = b'\t';

/// A single input line split into its tab-separated cells.
///
/// Cells borrow from the line buffer. Trailing empty cells are kept, so a line
/// always yields at least one cell, even when the line itself is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    cells: Vec<&'a [u8]>,
}

impl<'a> Row<'a> {
    /// Split a line on tab
    pub fn split(line: &'a [u8]) -> Self {
        Self {
            cells: line.split(|&b| b == TAB).collect(),
        }
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false for a split line; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Get a cell by column index
    pub fn get(&self, index: usize) -> Option<&'a [u8]> {
        self.cells.get(index).copied()
    }

    /// All cells in column order
    pub fn cells(&self) -> &[&'a [u8]] {
        &self.cells
    }
}
