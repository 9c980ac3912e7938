use destrank::ml::ProbabilityClassifier;

/// Scores classes by closeness of the first feature to each class code.
///
/// A row whose first feature equals `c` ranks class `c` first, then its
/// neighbours; classes further than `reach` get zero probability.
pub struct DistanceClassifier {
    pub classes: usize,
    pub reach: f32,
}

impl ProbabilityClassifier for DistanceClassifier {
    fn class_count(&self) -> usize {
        self.classes
    }

    fn predict_proba(&self, features: &[f32]) -> Vec<f32> {
        let center = features.first().copied().unwrap_or(0.0);
        (0..self.classes)
            .map(|class_idx| {
                let distance = (class_idx as f32 - center).abs();
                (self.reach - distance).max(0.0)
            })
            .collect()
    }
}
