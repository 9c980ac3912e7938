//! Error type shared by the codec, splitter and evaluation helpers.

use thiserror::Error;

/// Errors raised while encoding labels, splitting datasets or aggregating scores.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A label was not observed when the codec was fitted.
    #[error("Unknown label {label:?}")]
    UnknownLabel { label: String },
    /// A class code falls outside the known class range.
    #[error("Unknown class code {code} (expected < {class_count})")]
    UnknownCode { code: usize, class_count: usize },
    /// The dataset cannot be split with every class on both sides.
    #[error("Cannot stratify split: {reason}")]
    Stratification { reason: String },
    /// Features and targets disagree on the number of samples.
    #[error("Feature rows ({features}) and targets ({targets}) differ in length")]
    DimensionMismatch { features: usize, targets: usize },
    /// A mean or fit was requested over no samples.
    #[error("Empty input: {what}")]
    EmptyInput { what: &'static str },
    /// The requested target column is not part of the table.
    #[error("Missing target column {column:?}")]
    MissingColumn { column: String },
    /// A feature column holds a non-numeric value.
    #[error("Row {row} column {column:?} is not numeric")]
    NonNumericFeature { row: usize, column: String },
    /// A row does not match the table width.
    #[error("Row {row} has {found} values but expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Convenience alias for fallible evaluation helpers.
pub type EvalResult<T> = Result<T, EvalError>;
