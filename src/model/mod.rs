//! Record model shared by the expand and collapse pipelines

mod group;
mod row;
mod value_set;

pub use group::{GroupTable, Insert};
pub use row::{Row, TAB};
pub use value_set::{split_cell, Combinations, ValueSet, COLON};
