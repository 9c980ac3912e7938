//! Library exports for ranking evaluation of destination classifiers.
/// Application directory helpers.
pub mod app_dirs;
/// Evaluation settings.
pub mod config;
/// Target extraction and stratified splits.
pub mod dataset;
/// Shared error type.
pub mod error;
/// Logging setup for evaluation drivers.
pub mod logging;
/// Label codec, ranking and nDCG aggregation.
pub mod ml;

pub use error::{EvalError, EvalResult};
