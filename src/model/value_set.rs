//! Multi-valued cells and their cartesian product

/// Sub-value delimiter inside a cell
pub const COLON: u8 = b':';

/// Split a cell on colon, keeping trailing empties.
///
/// An empty cell yields exactly one empty value, never zero values.
pub fn split_cell(cell: &[u8]) -> impl Iterator<Item = &[u8]> {
    cell.split(|&b| b == COLON)
}

/// The ordered values of one cell, already validated as printable ASCII
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueSet<'a> {
    values: Vec<&'a str>,
}

impl<'a> ValueSet<'a> {
    pub fn new(values: Vec<&'a str>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Lazy cartesian product over a row's value sets.
///
/// Combinations come out in lexicographic order: the first column is the outer
/// dimension and the last column varies fastest.
#[derive(Debug, Clone)]
pub struct Combinations<'a> {
    sets: Vec<ValueSet<'a>>,
    // odometer position, one digit per column
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Combinations<'a> {
    pub fn new(sets: Vec<ValueSet<'a>>) -> Self {
        let done = sets.iter().any(ValueSet::is_empty);
        let indices = vec![0; sets.len()];
        Self {
            sets,
            indices,
            done,
        }
    }

    /// Advance the odometer; returns false once every digit has wrapped
    fn advance(&mut self) -> bool {
        for pos in (0..self.sets.len()).rev() {
            self.indices[pos] += 1;
            if self.indices[pos] < self.sets[pos].len() {
                return true;
            }
            self.indices[pos] = 0;
        }
        false
    }
}

impl<'a> Iterator for Combinations<'a> {
    type Item = Vec<&'a str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let combination = self
            .sets
            .iter()
            .zip(&self.indices)
            .map(|(set, &i)| set.values[i])
            .collect();

        if !self.advance() {
            self.done = true;
        }

        Some(combination)
    }
}
