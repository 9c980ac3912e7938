//! Ranking evaluation for multi-class probability classifiers.
//!
//! A classifier's probability vector is turned into a best-first class ranking,
//! scored with single-relevant-item nDCG, then averaged over a labeled dataset.

pub mod evaluate;
pub mod label_codec;
pub mod ndcg;
pub mod ranking;

pub use evaluate::{
    ClassScore, DEFAULT_CLASS_COUNT, EvalReport, evaluate, mean_score, per_class_mean_score,
    score_samples,
};
pub use label_codec::LabelCodec;
pub use ndcg::{DEFAULT_RANK, dcg, ideal_dcg, ndcg};
pub use ranking::{ProbabilityClassifier, TieBreak, rank_classes, ranked_prediction};
