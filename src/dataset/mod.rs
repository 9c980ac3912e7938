//! Dataset preparation: target extraction and stratified train/test splits.

pub mod split;
pub mod table;

pub use split::{DatasetSplit, SplitOptions, stratified_split};
pub use table::{Cell, Table};

use crate::config::EvalConfig;
use crate::error::EvalResult;

/// Pull the configured target column out of `table` and split it.
pub fn prepare_split(table: &Table, config: &EvalConfig) -> EvalResult<DatasetSplit> {
    let (features, labels) = table.split_target(&config.target_column)?;
    stratified_split(&features, &labels, &config.split)
}
