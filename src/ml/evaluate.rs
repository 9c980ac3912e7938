//! Mean nDCG over a labeled dataset, overall and per true class.

use tracing::{debug, info};

use crate::config::EvalConfig;
use crate::error::{EvalError, EvalResult};
use crate::ml::label_codec::LabelCodec;
use crate::ml::ndcg::{DEFAULT_RANK, ndcg};
use crate::ml::ranking::{ProbabilityClassifier, TieBreak, ranked_prediction};

/// Number of destination classes known to the domain.
pub const DEFAULT_CLASS_COUNT: usize = 12;

/// Mean nDCG for a single true class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassScore {
    /// Class code.
    pub class_idx: usize,
    /// Decoded label, when the codec knows the code.
    pub label: Option<String>,
    /// Number of samples whose true class is `class_idx`.
    pub support: usize,
    /// `None` when the class has no samples.
    pub mean: Option<f64>,
}

/// Summary of one evaluation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EvalReport {
    pub rank: usize,
    pub samples: usize,
    pub mean: f64,
    pub per_class: Vec<ClassScore>,
}

/// Score every sample, returning one nDCG value per row.
pub fn score_samples<C: ProbabilityClassifier + ?Sized>(
    classifier: &C,
    features: &[Vec<f32>],
    targets: &[usize],
    rank: usize,
    tie_break: TieBreak,
) -> EvalResult<Vec<f64>> {
    check_inputs(features, targets)?;
    Ok(features
        .iter()
        .zip(targets)
        .map(|(row, &truth)| ndcg(&ranked_prediction(classifier, row, tie_break), truth, rank))
        .collect())
}

/// Mean nDCG over all samples using the default tie-break.
pub fn mean_score<C: ProbabilityClassifier + ?Sized>(
    classifier: &C,
    features: &[Vec<f32>],
    targets: &[usize],
    rank: usize,
) -> EvalResult<f64> {
    let scores = score_samples(classifier, features, targets, rank, TieBreak::default())?;
    Ok(mean_of(&scores))
}

/// Mean nDCG grouped by true class, one slot per code in `0..class_count`.
pub fn per_class_mean_score<C: ProbabilityClassifier + ?Sized>(
    classifier: &C,
    features: &[Vec<f32>],
    targets: &[usize],
    codec: &LabelCodec,
    class_count: usize,
) -> EvalResult<Vec<ClassScore>> {
    let scores =
        score_samples(classifier, features, targets, DEFAULT_RANK, TieBreak::default())?;
    group_by_class(&scores, targets, codec, class_count)
}

/// Run a full evaluation with the configured rank, tie-break and class count.
pub fn evaluate<C: ProbabilityClassifier + ?Sized>(
    classifier: &C,
    features: &[Vec<f32>],
    targets: &[usize],
    codec: &LabelCodec,
    config: &EvalConfig,
) -> EvalResult<EvalReport> {
    let scores = score_samples(classifier, features, targets, config.rank, config.tie_break)?;
    let per_class = group_by_class(&scores, targets, codec, config.class_count)?;
    let mean = mean_of(&scores);
    for class in per_class.iter().filter(|class| class.support > 0) {
        debug!(
            "class {:>2} {:<8} support={} ndcg={:.4}",
            class.class_idx,
            class.label.as_deref().unwrap_or("?"),
            class.support,
            class.mean.unwrap_or_default()
        );
    }
    info!(
        "nDCG@{} over {} samples: {:.4}",
        config.rank,
        scores.len(),
        mean
    );
    Ok(EvalReport {
        rank: config.rank,
        samples: scores.len(),
        mean,
        per_class,
    })
}

fn group_by_class(
    scores: &[f64],
    targets: &[usize],
    codec: &LabelCodec,
    class_count: usize,
) -> EvalResult<Vec<ClassScore>> {
    let mut sums = vec![(0.0f64, 0usize); class_count];
    for (&score, &truth) in scores.iter().zip(targets) {
        let slot = sums.get_mut(truth).ok_or(EvalError::UnknownCode {
            code: truth,
            class_count,
        })?;
        slot.0 += score;
        slot.1 += 1;
    }
    Ok(sums
        .into_iter()
        .enumerate()
        .map(|(class_idx, (sum, support))| ClassScore {
            class_idx,
            label: codec.label_of(class_idx).ok().map(str::to_string),
            support,
            mean: (support > 0).then(|| sum / support as f64),
        })
        .collect())
}

fn check_inputs(features: &[Vec<f32>], targets: &[usize]) -> EvalResult<()> {
    if features.len() != targets.len() {
        return Err(EvalError::DimensionMismatch {
            features: features.len(),
            targets: targets.len(),
        });
    }
    if targets.is_empty() {
        return Err(EvalError::EmptyInput {
            what: "no samples to score",
        });
    }
    Ok(())
}

fn mean_of(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}
