//! Prediction submission with ordered encoding fallback
//!
//! The provider's accepted request encoding differs between deployments, so
//! a prediction is submitted by walking a fixed list of encoding strategies
//! and returning the first success. Each strategy is a distinct encoding
//! guess tried exactly once with no delay; this is a compatibility
//! workaround, not a retry policy, and must never grow backoff.

use crate::ApiClient;
use freelance_core::types::{FeatureVector, Prediction};
use freelance_core::{Error, Result};
use freelance_model::ModelKind;
use serde_json::json;
use tracing::{debug, warn};

/// One request encoding strategy for the predict endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictEncoding {
    /// The feature object as the whole body
    PlainJson,
    /// The feature object wrapped in a single-element array
    ArrayWrapped,
    /// `{data: <object>}`
    DataWrapped,
    /// `{data: "<json string>"}`
    JsonString,
    /// Query-string GET instead of a body
    QueryString,
}

impl PredictEncoding {
    /// The fixed attempt order
    pub const ATTEMPT_ORDER: [Self; 5] = [
        Self::PlainJson,
        Self::ArrayWrapped,
        Self::DataWrapped,
        Self::JsonString,
        Self::QueryString,
    ];

    /// Human readable strategy name used in failure aggregation
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::PlainJson => "plain JSON body",
            Self::ArrayWrapped => "array-wrapped body",
            Self::DataWrapped => "data-wrapped body",
            Self::JsonString => "JSON-string-wrapped body",
            Self::QueryString => "query-string GET",
        }
    }
}

/// Path served by each model stub
#[must_use]
pub const fn predict_path(model: ModelKind) -> &'static str {
    match model {
        ModelKind::RandomForest => "/predict_high_earner",
        ModelKind::Logistic => "/predict_high_earner_logistic",
        ModelKind::Tree => "/predict_high_earner_tree",
    }
}

impl ApiClient {
    /// Submit a prediction request, falling back through every encoding
    ///
    /// # Errors
    ///
    /// Returns [`Error::PredictionUnavailable`] carrying one failure
    /// description per attempted encoding when every strategy fails.
    pub async fn predict(
        &self,
        features: &FeatureVector,
        model: ModelKind,
    ) -> Result<Prediction> {
        let path = predict_path(model);
        let mut attempts = Vec::new();

        for encoding in PredictEncoding::ATTEMPT_ORDER {
            match self.attempt_predict(path, features, encoding).await {
                Ok(prediction) => {
                    if !attempts.is_empty() {
                        debug!(
                            encoding = encoding.describe(),
                            failed_attempts = attempts.len(),
                            "prediction succeeded after fallback"
                        );
                    }
                    return Ok(prediction);
                }
                Err(e) => {
                    warn!(encoding = encoding.describe(), error = %e, "predict attempt failed");
                    attempts.push(format!("{}: {e}", encoding.describe()));
                }
            }
        }

        Err(Error::PredictionUnavailable { attempts })
    }

    async fn attempt_predict(
        &self,
        path: &str,
        features: &FeatureVector,
        encoding: PredictEncoding,
    ) -> Result<Prediction> {
        match encoding {
            PredictEncoding::PlainJson => self.post_json(path, features).await,
            PredictEncoding::ArrayWrapped => {
                self.post_json(path, std::slice::from_ref(features)).await
            }
            PredictEncoding::DataWrapped => {
                self.post_json(path, &json!({ "data": features })).await
            }
            PredictEncoding::JsonString => {
                let raw = serde_json::to_string(features)?;
                self.post_json(path, &json!({ "data": raw })).await
            }
            PredictEncoding::QueryString => {
                let query = feature_query(features);
                self.get_json(&format!("{path}?{query}")).await
            }
        }
    }
}

/// Encode the present feature fields as query parameters
fn feature_query(features: &FeatureVector) -> String {
    let Ok(serde_json::Value::Object(fields)) = serde_json::to_value(features) else {
        return String::new();
    };

    let mut params = Vec::with_capacity(fields.len());
    for (key, value) in &fields {
        let raw = value
            .as_str()
            .map_or_else(|| value.to_string(), ToString::to_string);
        params.push(format!("{key}={}", urlencoding::encode(&raw)));
    }
    params.join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_attempt_order_is_fixed() {
        assert_eq!(
            PredictEncoding::ATTEMPT_ORDER,
            [
                PredictEncoding::PlainJson,
                PredictEncoding::ArrayWrapped,
                PredictEncoding::DataWrapped,
                PredictEncoding::JsonString,
                PredictEncoding::QueryString,
            ]
        );
    }

    #[test]
    fn test_predict_paths() {
        assert_eq!(predict_path(ModelKind::RandomForest), "/predict_high_earner");
        assert_eq!(
            predict_path(ModelKind::Logistic),
            "/predict_high_earner_logistic"
        );
        assert_eq!(predict_path(ModelKind::Tree), "/predict_high_earner_tree");
    }

    #[test]
    fn test_feature_query_encodes_present_fields_only() {
        let features = FeatureVector {
            experience_level: Some("Expert".to_string()),
            hourly_rate: Some(80.0),
            job_category: Some("Web Development".to_string()),
            ..FeatureVector::default()
        };

        let query = feature_query(&features);
        assert!(query.contains("ExperienceLevel=Expert"));
        assert!(query.contains("HourlyRate=80"));
        assert!(query.contains("JobCategory=Web%20Development"));
        assert!(!query.contains("Platform"));
    }

    #[test]
    fn test_feature_query_empty_features() {
        assert_eq!(feature_query(&FeatureVector::default()), "");
    }
}
