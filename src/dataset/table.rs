//! In-memory raw tables and target column extraction.

use crate::error::{EvalError, EvalResult};

/// Single cell of a raw dataset table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f32),
    Text(String),
}

/// In-memory table with named columns, one row per sample.
#[derive(Debug, Clone, Default)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Append a row, rejecting rows that do not match the column count.
    pub fn push_row(&mut self, row: Vec<Cell>) -> EvalResult<()> {
        if row.len() != self.columns.len() {
            return Err(EvalError::RaggedRow {
                row: self.rows.len(),
                expected: self.columns.len(),
                found: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Separate `target` from the feature columns.
    ///
    /// The target column is returned as raw labels (numeric targets are formatted);
    /// every other column must hold numbers.
    pub fn split_target(&self, target: &str) -> EvalResult<(Vec<Vec<f32>>, Vec<String>)> {
        let target_idx = self
            .columns
            .iter()
            .position(|column| column == target)
            .ok_or_else(|| EvalError::MissingColumn {
                column: target.to_string(),
            })?;
        let mut features = Vec::with_capacity(self.rows.len());
        let mut labels = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            if row.len() != self.columns.len() {
                return Err(EvalError::RaggedRow {
                    row: row_idx,
                    expected: self.columns.len(),
                    found: row.len(),
                });
            }
            let mut values = Vec::with_capacity(row.len() - 1);
            for (col_idx, cell) in row.iter().enumerate() {
                match (col_idx == target_idx, cell) {
                    (true, Cell::Text(label)) => labels.push(label.clone()),
                    (true, Cell::Number(value)) => labels.push(value.to_string()),
                    (false, Cell::Number(value)) => values.push(*value),
                    (false, Cell::Text(_)) => {
                        return Err(EvalError::NonNumericFeature {
                            row: row_idx,
                            column: self.columns[col_idx].clone(),
                        });
                    }
                }
            }
            features.push(values);
        }
        Ok((features, labels))
    }
}
