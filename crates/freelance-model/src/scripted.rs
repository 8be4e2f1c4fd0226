//! Deterministic classifier double for exact test assertions

use crate::classifier::{DecisionBand, HighEarnerClassifier};
use crate::registry::ModelKind;
use freelance_core::types::{FeatureVector, Prediction, PredictedClass};

/// Deterministic stand-in for [`HeuristicClassifier`](crate::HeuristicClassifier)
///
/// Applies the same banded policy but without randomness: the class is
/// positive when the band's bias is at least one half, and the displayed
/// probability is the midpoint of the band's range. Substituting this
/// implementation makes the probabilistic end-to-end assertions exact.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptedClassifier;

impl ScriptedClassifier {
    /// Create a new scripted classifier
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Midpoint of a band's displayed-probability range
    #[must_use]
    pub const fn band_midpoint(band: DecisionBand) -> f64 {
        match band {
            DecisionBand::Strong => 0.825,
            DecisionBand::Moderate => 0.55,
            DecisionBand::Weak => 0.20,
        }
    }
}

impl HighEarnerClassifier for ScriptedClassifier {
    fn classify(&self, features: &FeatureVector, model: ModelKind) -> Prediction {
        let band = DecisionBand::from_features(features);
        let probability_yes = Self::band_midpoint(band);
        let predicted_class = if band.positive_bias() >= 0.5 {
            PredictedClass::Yes
        } else {
            PredictedClass::No
        };

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

    #[test]
    fn test_scripted_is_deterministic() {
        let classifier = ScriptedClassifier::new();
        let features = FeatureVector {
            experience_level: Some("Expert".to_string()),
            hourly_rate: Some(80.0),
            ..FeatureVector::default()
        };

        let first = classifier.classify(&features, ModelKind::RandomForest);
        let second = classifier.classify(&features, ModelKind::RandomForest);
        assert_eq!(first, second);
        assert_eq!(first.predicted_class, PredictedClass::Yes);
        assert_eq!(first.probability_yes, 0.825);
        assert!((first.probability_yes + first.probability_no - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_scripted_band_midpoints() {
        assert_eq!(ScriptedClassifier::band_midpoint(DecisionBand::Strong), 0.825);
        assert_eq!(
            ScriptedClassifier::band_midpoint(DecisionBand::Moderate),
            0.55
        );
        assert_eq!(ScriptedClassifier::band_midpoint(DecisionBand::Weak), 0.20);
    }

    #[test]
    fn test_scripted_weak_band_is_negative() {
        let classifier = ScriptedClassifier::new();
        let prediction = classifier.classify(&FeatureVector::default(), ModelKind::Logistic);
        assert_eq!(prediction.predicted_class, PredictedClass::No);
        assert_eq!(prediction.probability_yes, 0.20);
    }

    #[test]
    fn test_scripted_moderate_band_is_positive() {
        let classifier = ScriptedClassifier::new();
        let features = FeatureVector {
            experience_level: Some("Intermediate".to_string()),
            hourly_rate: Some(30.0),
            ..FeatureVector::default()
        };
        let prediction = classifier.classify(&features, ModelKind::Tree);
        assert_eq!(prediction.predicted_class, PredictedClass::Yes);
        assert_eq!(prediction.probability_yes, 0.55);
    }
}
