//! Jittered heuristic classifier used by the live provider

use crate::classifier::{DecisionBand, HighEarnerClassifier};
use crate::registry::ModelKind;
use freelance_core::types::{FeatureVector, Prediction, PredictedClass};
use rand::Rng;
use tracing::debug;

/// The serving classifier: banded thresholds plus uniform jitter
///
/// The class label and the displayed probability are sampled independently,
/// reproducing the upstream mock exactly. The displayed probability is not a
/// calibrated confidence score.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// Create a new heuristic classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl HighEarnerClassifier for HeuristicClassifier {
    fn classify(&self, features: &FeatureVector, model: ModelKind) -> Prediction {
        let band = DecisionBand::from_features(features);
        let (lo, hi) = band.probability_range();
        let mut rng = rand::thread_rng();

        let predicted_class = if rng.gen_bool(band.positive_bias()) {
            PredictedClass::Yes
        } else {
            PredictedClass::No
        };
        let probability_yes = rng.gen_range(lo..hi);

        debug!(
            model = model.id(),
            ?band,
            class = %predicted_class,
            probability = probability_yes,
            "classified feature vector"
        );

        Prediction {
            model_used: model.id().to_string(),
            predicted_class,
            probability_yes,
            probability_no: 1.0 - probability_yes,
            error: None,
            note: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expert_features() -> FeatureVector {
        FeatureVector {
            experience_level: Some("Expert".to_string()),
            hourly_rate: Some(80.0),
            ..FeatureVector::default()
        }
    }

    #[test]
    fn test_strong_band_is_always_positive() {
        let classifier = HeuristicClassifier::new();
        for _ in 0..64 {
            let prediction = classifier.classify(&expert_features(), ModelKind::RandomForest);
            assert_eq!(prediction.predicted_class, PredictedClass::Yes);
            assert!((0.70..0.95).contains(&prediction.probability_yes));
        }
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let classifier = HeuristicClassifier::new();
        let sparse = FeatureVector::default();
        for _ in 0..64 {
            let prediction = classifier.classify(&sparse, ModelKind::Logistic);
            let total = prediction.probability_yes + prediction.probability_no;
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_weak_band_probability_range() {
        let classifier = HeuristicClassifier::new();
        let features = FeatureVector {
            experience_level: Some("Beginner".to_string()),
            hourly_rate: Some(10.0),
            ..FeatureVector::default()
        };
        for _ in 0..64 {
            let prediction = classifier.classify(&features, ModelKind::Tree);
            assert!((0.0..0.40).contains(&prediction.probability_yes));
        }
    }

    #[test]
    fn test_model_id_is_echoed() {
        let classifier = HeuristicClassifier::new();
        let prediction = classifier.classify(&expert_features(), ModelKind::Tree);
        assert_eq!(prediction.model_used, "tree");
    }
}
