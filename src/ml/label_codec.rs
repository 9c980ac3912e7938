//! Bidirectional mapping between class labels and dense integer codes.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{EvalError, EvalResult};

/// Immutable label <-> code mapping fitted from observed targets.
///
/// Codes follow the sorted order of the distinct labels, so the same label set
/// always produces the same mapping regardless of the order it was observed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelCodec {
    classes: Vec<String>,
    index: BTreeMap<String, usize>,
}

impl LabelCodec {
    /// Fit a codec from every observed label.
    pub fn fit<I, S>(labels: I) -> EvalResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unique: BTreeSet<String> = labels
            .into_iter()
            .map(|label| label.as_ref().to_string())
            .collect();
        if unique.is_empty() {
            return Err(EvalError::EmptyInput {
                what: "no labels to fit",
            });
        }
        let classes: Vec<String> = unique.into_iter().collect();
        let index = classes
            .iter()
            .cloned()
            .enumerate()
            .map(|(idx, label)| (label, idx))
            .collect();
        Ok(Self { classes, index })
    }

    /// Number of distinct classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Class labels ordered by code.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Label -> code lookup table.
    pub fn encoding_map(&self) -> &BTreeMap<String, usize> {
        &self.index
    }

    pub fn code_of(&self, label: &str) -> EvalResult<usize> {
        self.index
            .get(label)
            .copied()
            .ok_or_else(|| EvalError::UnknownLabel {
                label: label.to_string(),
            })
    }

    pub fn label_of(&self, code: usize) -> EvalResult<&str> {
        self.classes
            .get(code)
            .map(String::as_str)
            .ok_or(EvalError::UnknownCode {
                code,
                class_count: self.classes.len(),
            })
    }

    /// Encode labels into class codes, failing on the first unseen label.
    pub fn encode<S: AsRef<str>>(&self, labels: &[S]) -> EvalResult<Vec<usize>> {
        labels
            .iter()
            .map(|label| self.code_of(label.as_ref()))
            .collect()
    }

    /// Decode class codes back into their labels.
    pub fn decode(&self, codes: &[usize]) -> EvalResult<Vec<String>> {
        codes
            .iter()
            .map(|&code| self.label_of(code).map(str::to_string))
            .collect()
    }
}
