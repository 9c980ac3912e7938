//! Discounted cumulative gain for a single relevant class.
//!
//! Each sample has exactly one true class, so relevance is binary and at most
//! one position contributes to the gain:
//!
//! `DCG@k = sum_{i=1}^{k} (2^rel_i - 1) / log2(i + 1)`
//!
//! The ideal ranking places the true class first, which always scores `1.0`.
//! Only the first occurrence of the true class counts, so a ranking that
//! repeats it cannot score above the ideal.

/// Default cut-off used when scoring rankings.
pub const DEFAULT_RANK: usize = 5;

/// DCG of the ideal ranking: the true class at position 1.
pub const fn ideal_dcg() -> f64 {
    1.0
}

/// Discounted cumulative gain of `ranked` against `true_label`, cut at `rank`.
pub fn dcg(ranked: &[usize], true_label: usize, rank: usize) -> f64 {
    ranked
        .iter()
        .take(rank)
        .position(|&class_idx| class_idx == true_label)
        .map_or(0.0, |idx| 1.0 / ((idx + 2) as f64).log2())
}

/// DCG normalized by the ideal score; always in `[0, 1]`.
pub fn ndcg(ranked: &[usize], true_label: usize, rank: usize) -> f64 {
    dcg(ranked, true_label, rank) / ideal_dcg()
}
