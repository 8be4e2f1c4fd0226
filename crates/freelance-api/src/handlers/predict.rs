//! Prediction stub endpoints
//!
//! The historical clients of this API disagree on the request encoding, so
//! the body is decoded through an ordered union of every shape seen in the
//! wild: a plain feature object, a single-element array, a `{data: ...}`
//! wrapper, and a `{data: "<json>"}` string wrapper. A body that fits none
//! of them degrades to an all-default feature vector with a logged warning
//! instead of a rejection.

use crate::state::AppState;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::response::Json;
use freelance_core::types::{FeatureVector, Prediction};
use freelance_model::ModelKind;
use serde::Deserialize;
use std::sync::Arc;
use tracing::warn;
use validator::Validate;

/// Union of the predict request body encodings accepted on the wire
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PredictBody {
    /// A single-element array of feature objects
    Batch(Vec<FeatureVector>),
    /// A `{data: ...}` wrapper around inline or string-encoded features
    Wrapped(WrappedFeatures),
    /// A plain feature object
    Single(FeatureVector),
}

/// The `{data: ...}` wrapper shape
#[derive(Debug, Deserialize)]
pub struct WrappedFeatures {
    data: FeatureEncoding,
}

/// The wrapped payload is either inline JSON or a JSON string
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum FeatureEncoding {
    /// Features as an inline object
    Inline(FeatureVector),
    /// Features as a JSON-encoded string
    Encoded(String),
}

impl PredictBody {
    /// Collapse any accepted encoding into one feature vector
    #[must_use]
    pub fn into_features(self) -> FeatureVector {
        match self {
            Self::Batch(mut batch) => {
                if batch.is_empty() {
                    warn!("empty feature array in predict body, using defaults");
                    FeatureVector::default()
                } else {
                    batch.swap_remove(0)
                }
            }
            Self::Wrapped(wrapped) => match wrapped.data {
                FeatureEncoding::Inline(features) => features,
                FeatureEncoding::Encoded(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!(error = %e, "undecodable string-wrapped features, using defaults");
                    FeatureVector::default()
                }),
            },
            Self::Single(features) => features,
        }
    }
}

/// `POST /predict_high_earner`: random forest stub
pub async fn predict_random_forest(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictBody>, JsonRejection>,
) -> Json<Prediction> {
    run_prediction(&state, body, ModelKind::RandomForest)
}

/// `POST /predict_high_earner_logistic`: logistic regression stub
pub async fn predict_logistic(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictBody>, JsonRejection>,
) -> Json<Prediction> {
    run_prediction(&state, body, ModelKind::Logistic)
}

/// `POST /predict_high_earner_tree`: decision tree stub
pub async fn predict_tree(
    State(state): State<Arc<AppState>>,
    body: Result<Json<PredictBody>, JsonRejection>,
) -> Json<Prediction> {
    run_prediction(&state, body, ModelKind::Tree)
}

/// `GET /predict_high_earner`: query-string form of the same operation
///
/// Kept for clients that fall back to query parameters when no body
/// encoding is accepted.
pub async fn predict_random_forest_query(
    State(state): State<Arc<AppState>>,
    query: Result<Query<FeatureVector>, QueryRejection>,
) -> Json<Prediction> {
    let features = match query {
        Ok(Query(features)) => features,
        Err(rejection) => {
            warn!(%rejection, "unparseable predict query, using defaults");
            FeatureVector::default()
        }
    };
    Json(classify(&state, features, ModelKind::RandomForest))
}

fn run_prediction(
    state: &AppState,
    body: Result<Json<PredictBody>, JsonRejection>,
    model: ModelKind,
) -> Json<Prediction> {
    let features = match body {
        Ok(Json(body)) => body.into_features(),
        Err(rejection) => {
            warn!(%rejection, "unparseable predict body, using defaults");
            FeatureVector::default()
        }
    };
    Json(classify(state, features, model))
}

fn classify(state: &AppState, features: FeatureVector, model: ModelKind) -> Prediction {
    if let Err(errors) = features.validate() {
        // The stub tolerates out-of-range features; they only shift bands
        warn!(%errors, "feature vector failed validation, classifying anyway");
    }
    state.classifier.classify(&features, model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelance_core::Config;
    use freelance_core::types::PredictedClass;
    use freelance_model::ScriptedClassifier;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn scripted_state() -> Arc<AppState> {
        let mut config = Config::default();
        config.dataset.size = 5;
        config.dataset.seed = Some(1);
        Arc::new(AppState::with_classifier(
            config,
            Arc::new(ScriptedClassifier::new()),
        ))
    }

    fn expert_json() -> serde_json::Value {
        json!({"ExperienceLevel": "Expert", "HourlyRate": 80.0})
    }

    #[test]
    fn test_body_plain_object() {
        let body: PredictBody = serde_json::from_value(expert_json()).unwrap();
        let features = body.into_features();
        assert_eq!(features.experience_level.as_deref(), Some("Expert"));
        assert_eq!(features.hourly_rate, Some(80.0));
    }

    #[test]
    fn test_body_array_wrapped() {
        let body: PredictBody = serde_json::from_value(json!([expert_json()])).unwrap();
        assert_eq!(body.into_features().hourly_rate, Some(80.0));
    }

    #[test]
    fn test_body_data_wrapped() {
        let body: PredictBody = serde_json::from_value(json!({"data": expert_json()})).unwrap();
        assert_eq!(body.into_features().hourly_rate, Some(80.0));
    }

    #[test]
    fn test_body_json_string_wrapped() {
        let encoded = expert_json().to_string();
        let body: PredictBody = serde_json::from_value(json!({"data": encoded})).unwrap();
        assert_eq!(body.into_features().hourly_rate, Some(80.0));
    }

    #[test]
    fn test_body_garbage_string_degrades_to_defaults() {
        let body: PredictBody =
            serde_json::from_value(json!({"data": "definitely not json"})).unwrap();
        assert_eq!(body.into_features(), FeatureVector::default());
    }

    #[test]
    fn test_body_empty_array_degrades_to_defaults() {
        let body: PredictBody = serde_json::from_value(json!([])).unwrap();
        assert_eq!(body.into_features(), FeatureVector::default());
    }

    #[tokio::test]
    async fn test_predict_expert_is_deterministic_with_scripted_classifier() {
        let state = scripted_state();
        let body: PredictBody = serde_json::from_value(expert_json()).unwrap();

        let Json(prediction) =
            predict_random_forest(State(state), Ok(Json(body))).await;
        assert_eq!(prediction.predicted_class, PredictedClass::Yes);
        assert_eq!(prediction.probability_yes, 0.825);
        assert_eq!(prediction.model_used, "rf");
        let total = prediction.probability_yes + prediction.probability_no;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_predict_model_variants_echo_their_ids() {
        let state = scripted_state();

        let Json(logistic) = predict_logistic(
            State(Arc::clone(&state)),
            Ok(Json(serde_json::from_value(expert_json()).unwrap())),
        )
        .await;
        assert_eq!(logistic.model_used, "logistic");

        let Json(tree) = predict_tree(
            State(state),
            Ok(Json(serde_json::from_value(expert_json()).unwrap())),
        )
        .await;
        assert_eq!(tree.model_used, "tree");
    }
}
