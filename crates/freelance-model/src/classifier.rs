//! Classifier abstraction and the shared decision policy
//!
//! The decision policy is a fixed set of threshold bands, not a trained
//! model. Callers pick an implementation at construction time: the
//! jittered [`HeuristicClassifier`](crate::HeuristicClassifier) for serving,
//! or the [`ScriptedClassifier`](crate::ScriptedClassifier) double when
//! tests need exact assertions.

use crate::registry::ModelKind;
use freelance_core::types::{FeatureVector, Prediction};

/// Binary high-earner classification service
pub trait HighEarnerClassifier: Send + Sync + std::fmt::Debug {
    /// Classify a feature vector using the named model stub
    ///
    /// The returned probabilities always sum to 1.
    fn classify(&self, features: &FeatureVector, model: ModelKind) -> Prediction;
}

/// Threshold band the decision policy places a feature vector in
///
/// Band selection depends only on experience level and hourly rate; the
/// remaining features are accepted but ignored, as in the upstream stub.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionBand {
    /// Expert experience or hourly rate above 40
    Strong,
    /// Intermediate experience and hourly rate above 25
    Moderate,
    /// Everything else
    Weak,
}

impl DecisionBand {
    /// Place a feature vector into its band
    #[must_use]
    pub fn from_features(features: &FeatureVector) -> Self {
        let level = features.experience_level.as_deref().unwrap_or_default();
        let rate = features.hourly_rate.unwrap_or_default();

        if level == "Expert" || rate > 40.0 {
            Self::Strong
        } else if level == "Intermediate" && rate > 25.0 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    /// Half-open range the displayed probability is drawn from
    #[must_use]
    pub const fn probability_range(self) -> (f64, f64) {
        match self {
            Self::Strong => (0.70, 0.95),
            Self::Moderate => (0.40, 0.70),
            Self::Weak => (0.0, 0.40),
        }
    }

    /// Probability that the band yields a positive class label
    ///
    /// Sampled independently of the displayed probability; the two are not
    /// required to be mutually consistent (mock-only behavior).
    #[must_use]
    pub const fn positive_bias(self) -> f64 {
        match self {
            Self::Strong => 1.0,
            Self::Moderate => 0.6,
            Self::Weak => 0.2,
        }
    }
}
