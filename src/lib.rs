//! tsvnorm - first normal form conversion for TSV data
//!
//! Two pipelines over the same record model:
//!
//! - [`Expander`] splits colon-separated cells and emits the cartesian product of
//!   each line, one value per column.
//! - [`Collapser`] groups `key<TAB>value` lines by key and joins each key's values
//!   with a colon, in first-seen key order.

pub mod cli;
pub mod collapse;
pub mod config;
pub mod error;
pub mod expand;
pub mod input;
pub mod logging;
pub mod model;
pub mod output;
pub mod validate;

pub use collapse::{CollapseStats, Collapser};
pub use config::{CollapseConfig, ExpandConfig};
pub use error::{CollapseError, ExpandError, Violation};
pub use expand::{ExpandStats, Expander, LineOutcome};
