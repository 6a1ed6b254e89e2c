//! Configuration handling for tsvnorm

use serde::{Deserialize, Serialize};

/// Limits applied by the expander
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpandConfig {
    /// Maximum number of tab-separated columns per line (exceeding it is fatal)
    pub max_columns: usize,
    /// Maximum number of colon-separated values in one cell
    pub max_values: usize,
    /// Maximum length of a single value, in bytes
    pub max_value_len: usize,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            max_columns: 5,
            max_values: 10,
            max_value_len: 10_000,
        }
    }
}

impl ExpandConfig {
    /// Create a config with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column limit
    pub fn with_max_columns(mut self, max: usize) -> Self {
        self.max_columns = max;
        self
    }

    /// Set the per-cell value limit
    pub fn with_max_values(mut self, max: usize) -> Self {
        self.max_values = max;
        self
    }

    /// Set the value length limit
    pub fn with_max_value_len(mut self, max: usize) -> Self {
        self.max_value_len = max;
        self
    }
}

/// Limits applied by the collapser
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollapseConfig {
    /// Number of input lines read before the run stops consuming input
    pub max_lines: usize,
    /// Maximum length of a key or value cell, in bytes
    pub max_cell_len: usize,
    /// Maximum number of values kept per key
    pub max_group_values: usize,
}

impl Default for CollapseConfig {
    fn default() -> Self {
        Self {
            max_lines: 1000,
            max_cell_len: 100,
            max_group_values: 10,
        }
    }
}

impl CollapseConfig {
    /// Create a config with the default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input line limit
    pub fn with_max_lines(mut self, max: usize) -> Self {
        self.max_lines = max;
        self
    }

    /// Set the cell length limit
    pub fn with_max_cell_len(mut self, max: usize) -> Self {
        self.max_cell_len = max;
        self
    }

    /// Set the per-key value limit
    pub fn with_max_group_values(mut self, max: usize) -> Self {
        self.max_group_values = max;
        self
    }
}
