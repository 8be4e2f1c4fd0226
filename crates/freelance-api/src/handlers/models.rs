//! Model metadata and comparison endpoints

use axum::extract::Path;
use axum::response::Json;
use freelance_core::types::{ModelComparison, ModelInfo};
use tracing::info;

/// `GET /data/model_comparison`: fixed stub metrics and ROC curves
pub async fn model_comparison() -> Json<ModelComparison> {
    Json(freelance_model::model_comparison())
}

/// `GET /model_info/:model_type`: metadata for one model stub
///
/// Unknown identifiers fall back to a defaulted name instead of failing.
pub async fn model_info(Path(model_type): Path<String>) -> Json<ModelInfo> {
    info!(model_type, "serving model info");
    Json(freelance_model::model_info(&model_type))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_model_info_known_type() {
        let Json(info) = model_info(Path("rf".to_string())).await;
        assert_eq!(info.model_name, "Random Forest");
        assert_eq!(info.model_type, "rf");
    }

    #[tokio::test]
    async fn test_model_info_unknown_type_defaults() {
        let Json(info) = model_info(Path("unknown_type".to_string())).await;
        assert_eq!(info.model_name, "Decision Tree");
        assert_eq!(info.model_type, "unknown_type");
    }

    #[tokio::test]
    async fn test_model_comparison_has_three_models() {
        let Json(comparison) = model_comparison().await;
        assert_eq!(comparison.performance.len(), 3);
        assert!(!comparison.roc_curves.rf.is_empty());
    }
}
