//! Turn per-class probabilities into a best-first list of class indices.

use std::cmp::Ordering;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Classifier able to score every class for a single feature vector.
///
/// The returned vector is aligned to the label codec's class order.
pub trait ProbabilityClassifier {
    /// Number of classes in each probability vector.
    fn class_count(&self) -> usize;

    /// Predict class probabilities for a feature vector.
    fn predict_proba(&self, features: &[f32]) -> Vec<f32>;
}

impl<C: ProbabilityClassifier + ?Sized> ProbabilityClassifier for &C {
    fn class_count(&self) -> usize {
        (**self).class_count()
    }

    fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        (**self).predict_proba(features)
    }
}

/// Ordering applied to classes with equal probability.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The lower class index ranks first.
    #[default]
    LowerIndexFirst,
    /// The higher class index ranks first.
    HigherIndexFirst,
}

impl TieBreak {
    fn order(self, a: usize, b: usize) -> Ordering {
        match self {
            TieBreak::LowerIndexFirst => a.cmp(&b),
            TieBreak::HigherIndexFirst => b.cmp(&a),
        }
    }
}

/// Rank class indices by descending probability, dropping exact zeros.
///
/// NaN entries sort after every finite probability.
pub fn rank_classes(probabilities: &[f32], tie_break: TieBreak) -> Vec<usize> {
    let mut pairs: Vec<(usize, f32)> = probabilities
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, prob)| prob != 0.0)
        .collect();
    pairs.sort_by(|a, b| {
        sort_key(b.1)
            .cmp(&sort_key(a.1))
            .then_with(|| tie_break.order(a.0, b.0))
    });
    pairs.into_iter().map(|(idx, _)| idx).collect()
}

/// Predict one sample and return its ranked class indices.
///
/// Probabilities past `classifier.class_count()` are ignored.
pub fn ranked_prediction<C: ProbabilityClassifier + ?Sized>(
    classifier: &C,
    features: &[f32],
    tie_break: TieBreak,
) -> Vec<usize> {
    let mut probabilities = classifier.predict_proba(features);
    probabilities.truncate(classifier.class_count());
    rank_classes(&probabilities, tie_break)
}

fn sort_key(prob: f32) -> OrderedFloat<f32> {
    if prob.is_nan() {
        OrderedFloat(f32::NEG_INFINITY)
    } else {
        OrderedFloat(prob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<f32>);

    impl ProbabilityClassifier for Fixed {
        fn class_count(&self) -> usize {
            self.0.len()
        }

        fn predict_proba(&self, _features: &[f32]) -> Vec<f32> {
            self.0.clone()
        }
    }

    /// Emits more probabilities than it has classes.
    struct Overlong {
        classes: usize,
    }

    impl ProbabilityClassifier for Overlong {
        fn class_count(&self) -> usize {
            self.classes
        }

        fn predict_proba(&self, _features: &[f32]) -> Vec<f32> {
            vec![0.1, 0.3, 0.0, 0.9, 0.5]
        }
    }

    #[test]
    fn zero_probability_classes_are_dropped() {
        let mut probs = vec![0.0f32; 12];
        probs[1] = 0.7;
        probs[2] = 0.3;
        assert_eq!(rank_classes(&probs, TieBreak::default()), vec![1, 2]);
    }

    #[test]
    fn ranks_by_descending_probability() {
        let probs = [0.1, 0.05, 0.5, 0.0, 0.35];
        assert_eq!(rank_classes(&probs, TieBreak::default()), vec![2, 4, 0, 1]);
    }

    #[test]
    fn tie_break_controls_equal_probabilities() {
        let probs = [0.25, 0.5, 0.25, 0.0];
        assert_eq!(
            rank_classes(&probs, TieBreak::LowerIndexFirst),
            vec![1, 0, 2]
        );
        assert_eq!(
            rank_classes(&probs, TieBreak::HigherIndexFirst),
            vec![1, 2, 0]
        );
    }

    #[test]
    fn nan_sorts_last() {
        let probs = [f32::NAN, 0.2, 0.8];
        assert_eq!(rank_classes(&probs, TieBreak::default()), vec![2, 1, 0]);
    }

    #[test]
    fn all_zero_yields_empty_ranking() {
        assert!(rank_classes(&[0.0; 4], TieBreak::default()).is_empty());
    }

    #[test]
    fn ranked_prediction_uses_classifier_output() {
        let clf = Fixed(vec![0.2, 0.0, 0.8]);
        let ranked = ranked_prediction(&clf, &[1.0, 2.0], TieBreak::default());
        assert_eq!(ranked, vec![2, 0]);
        assert!(ranked.len() <= clf.class_count());
    }

    #[test]
    fn extra_probabilities_are_ignored() {
        let clf = Overlong { classes: 3 };
        let ranked = ranked_prediction(&clf, &[0.0], TieBreak::default());
        assert_eq!(ranked, vec![1, 0]);
    }
}
