//! Seeded, stratified train/test splitting of encoded datasets.

use rand::rngs::StdRng;
use rand::{SeedableRng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EvalError, EvalResult};
use crate::ml::label_codec::LabelCodec;

/// Options for the stratified train/test split.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitOptions {
    /// Share of each class routed to the test split, strictly inside `(0, 1)`.
    pub test_fraction: f64,
    /// Seed for the deterministic shuffle.
    pub seed: u64,
}

impl Default for SplitOptions {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Shuffled, stratified train/test partition with the codec used for targets.
#[derive(Debug, Clone)]
pub struct DatasetSplit {
    pub train_x: Vec<Vec<f32>>,
    pub test_x: Vec<Vec<f32>>,
    pub train_y: Vec<usize>,
    pub test_y: Vec<usize>,
    pub codec: LabelCodec,
}

/// Encode `labels` and split rows so every class lands on both sides.
///
/// Each class contributes `round(n * test_fraction)` rows to the test split,
/// clamped so that both splits keep at least one row of the class.
pub fn stratified_split<S: AsRef<str>>(
    features: &[Vec<f32>],
    labels: &[S],
    options: &SplitOptions,
) -> EvalResult<DatasetSplit> {
    if features.len() != labels.len() {
        return Err(EvalError::DimensionMismatch {
            features: features.len(),
            targets: labels.len(),
        });
    }
    if labels.is_empty() {
        return Err(EvalError::EmptyInput {
            what: "no samples to split",
        });
    }
    let fraction = options.test_fraction;
    if !(fraction > 0.0 && fraction < 1.0) {
        return Err(EvalError::Stratification {
            reason: format!("test fraction {fraction} must be between 0 and 1"),
        });
    }

    let codec = LabelCodec::fit(labels)?;
    let codes = codec.encode(labels)?;
    let mut by_class: Vec<Vec<usize>> = vec![Vec::new(); codec.len()];
    for (row, &code) in codes.iter().enumerate() {
        by_class[code].push(row);
    }
    for (code, rows) in by_class.iter().enumerate() {
        if rows.len() < 2 {
            return Err(EvalError::Stratification {
                reason: format!(
                    "class {:?} has {} sample(s); at least 2 are required",
                    codec.classes()[code],
                    rows.len()
                ),
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(options.seed);
    let mut train_rows = Vec::new();
    let mut test_rows = Vec::new();
    for mut rows in by_class {
        rows.shuffle(&mut rng);
        let n = rows.len();
        let test_n = ((n as f64) * fraction).round().clamp(1.0, (n - 1) as f64) as usize;
        test_rows.extend_from_slice(&rows[..test_n]);
        train_rows.extend_from_slice(&rows[test_n..]);
    }
    train_rows.shuffle(&mut rng);
    test_rows.shuffle(&mut rng);

    debug!(
        "Stratified split over {} classes: train={} test={}",
        codec.len(),
        train_rows.len(),
        test_rows.len()
    );

    let pick_x = |rows: &[usize]| -> Vec<Vec<f32>> {
        rows.iter().map(|&row| features[row].clone()).collect()
    };
    let pick_y =
        |rows: &[usize]| -> Vec<usize> { rows.iter().map(|&row| codes[row]).collect() };
    Ok(DatasetSplit {
        train_x: pick_x(&train_rows),
        test_x: pick_x(&test_rows),
        train_y: pick_y(&train_rows),
        test_y: pick_y(&test_rows),
        codec,
    })
}
