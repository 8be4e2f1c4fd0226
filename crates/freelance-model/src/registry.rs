//! Model registry: identifiers, metadata and fixed comparison metrics
//!
//! The "models" here are stubs; their metrics are fixed placeholder values
//! served for the dashboard's comparison section, not measurements.

use freelance_core::types::{
    AucValues, ModelComparison, ModelInfo, ModelPerformance, RocCurves, RocPoint,
};
use serde_json::json;

/// The fixed set of model stubs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelKind {
    /// Random forest stub
    RandomForest,
    /// Logistic regression stub
    Logistic,
    /// Decision tree stub
    Tree,
}

impl ModelKind {
    /// Every model kind, in display order
    pub const ALL: [Self; 3] = [Self::RandomForest, Self::Logistic, Self::Tree];

    /// Wire identifier
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::RandomForest => "rf",
            Self::Logistic => "logistic",
            Self::Tree => "tree",
        }
    }

    /// Human readable name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::RandomForest => "Random Forest",
            Self::Logistic => "Logistic Regression",
            Self::Tree => "Decision Tree",
        }
    }

    /// Parse a wire identifier; `None` for unknown identifiers
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "rf" => Some(Self::RandomForest),
            "logistic" => Some(Self::Logistic),
            "tree" => Some(Self::Tree),
            _ => None,
        }
    }

    /// Fixed AUC placeholder for this stub
    #[must_use]
    pub const fn auc(self) -> f64 {
        match self {
            Self::RandomForest => 0.90,
            Self::Logistic => 0.85,
            Self::Tree => 0.80,
        }
    }
}

impl std::fmt::Display for ModelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Metadata for `/model_info/:model_type`
///
/// Unknown identifiers do not fail: the name defaults to the decision tree
/// label while the requested identifier is echoed back, matching the
/// upstream fall-through.
#[must_use]
pub fn model_info(model_type: &str) -> ModelInfo {
    let model_name = ModelKind::parse(model_type)
        .map_or(ModelKind::Tree.display_name(), ModelKind::display_name);

    ModelInfo {
        model_name: model_name.to_string(),
        model_type: model_type.to_string(),
        best_tune: json!({"param": "value"}),
        cv_roc_on_train: 0.85,
    }
}

/// Fixed comparison metrics and ROC curves for every model stub
#[must_use]
pub fn model_comparison() -> ModelComparison {
    let performance = vec![
        stub_performance(ModelKind::RandomForest, 0.86, 0.82, 0.88, 0.84),
        stub_performance(ModelKind::Logistic, 0.81, 0.78, 0.83, 0.79),
        stub_performance(ModelKind::Tree, 0.77, 0.74, 0.79, 0.75),
    ];

    let roc_curves = RocCurves {
        logistic: roc_curve(ModelKind::Logistic.auc()),
        tree: roc_curve(ModelKind::Tree.auc()),
        rf: roc_curve(ModelKind::RandomForest.auc()),
    };

    let auc_values = AucValues {
        logistic: ModelKind::Logistic.auc(),
        tree: ModelKind::Tree.auc(),
        rf: ModelKind::RandomForest.auc(),
    };

    ModelComparison {
        performance,
        roc_curves,
        auc_values,
        error: None,
    }
}

fn stub_performance(
    kind: ModelKind,
    accuracy: f64,
    sensitivity: f64,
    specificity: f64,
    precision: f64,
) -> ModelPerformance {
    let f1_score = 2.0 * precision * sensitivity / (precision + sensitivity);
    ModelPerformance {
        model: kind.id().to_string(),
        accuracy,
        sensitivity,
        specificity,
        precision,
        f1_score,
        auc: kind.auc(),
    }
}

/// Synthesize a concave ROC curve with the requested area under it
///
/// Uses the power curve `sensitivity = fpr^(1/b)` whose exact area is
/// `b / (b + 1)`, so `b = auc / (1 - auc)` hits the target.
fn roc_curve(auc: f64) -> Vec<RocPoint> {
    let b = auc / (1.0 - auc);
    (0..=20)
        .map(|i| {
            let fpr = f64::from(i) / 20.0;
            RocPoint {
                specificity: 1.0 - fpr,
                sensitivity: fpr.powf(1.0 / b),
            }
        })
        .collect()
}
