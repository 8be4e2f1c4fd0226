//! Prediction form view-model
//!
//! Holds the feature inputs and the selected model, and wraps submission so
//! that a failed request surfaces as a clearly labeled synthetic fallback
//! result instead of an error state. The fallback is a UX decision: the
//! form always shows a result, but never silently passes the placeholder
//! off as a real prediction.

use freelance_client::ApiClient;
use freelance_core::Error;
use freelance_core::types::{
    EXPERIENCE_LEVELS, FeatureVector, JOB_CATEGORIES, PLATFORMS, PROJECT_TYPES, Prediction,
    PredictedClass,
};
use freelance_model::ModelKind;
use tracing::warn;

/// Note attached to every synthetic fallback result
pub const FALLBACK_NOTE: &str = "Synthetic fallback result: the prediction service was unreachable";

/// Prediction form state
#[derive(Debug, Clone)]
pub struct PredictionForm {
    /// Feature inputs
    pub features: FeatureVector,
    /// Selected model stub
    pub model: ModelKind,
}

impl Default for PredictionForm {
    fn default() -> Self {
        Self {
            features: default_features(),
            model: ModelKind::RandomForest,
        }
    }
}

impl PredictionForm {
    /// Create the form with its default inputs
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the job category select
    #[must_use]
    pub const fn job_category_options() -> [&'static str; 8] {
        JOB_CATEGORIES
    }

    /// Options for the platform select
    #[must_use]
    pub const fn platform_options() -> [&'static str; 5] {
        PLATFORMS
    }

    /// Options for the experience level select
    #[must_use]
    pub const fn experience_level_options() -> [&'static str; 3] {
        EXPERIENCE_LEVELS
    }

    /// Options for the project type select
    #[must_use]
    pub const fn project_type_options() -> [&'static str; 2] {
        PROJECT_TYPES
    }

    /// Submit the form, substituting a labeled fallback on failure
    pub async fn submit(&self, client: &ApiClient) -> Prediction {
        match client.predict(&self.features, self.model).await {
            Ok(prediction) => prediction,
            Err(e) => {
                warn!(error = %e, "prediction failed, substituting fallback result");
                fallback_prediction(self.model, &e)
            }
        }
    }
}

/// The synthetic negative result shown when the service is unreachable
#[must_use]
pub fn fallback_prediction(model: ModelKind, error: &Error) -> Prediction {
    Prediction {
        model_used: model.id().to_string(),
        predicted_class: PredictedClass::No,
        probability_yes: 0.0,
        probability_no: 1.0,
        error: Some(error.to_string()),
        note: Some(FALLBACK_NOTE.to_string()),
    }
}

/// Whether a prediction is the synthetic fallback rather than a real response
#[must_use]
pub fn is_fallback(prediction: &Prediction) -> bool {
    prediction.note.as_deref() == Some(FALLBACK_NOTE)
}

/// The form's initial feature values
fn default_features() -> FeatureVector {
    FeatureVector {
        job_category: Some("Web Development".to_string()),
        platform: Some("Upwork".to_string()),
        experience_level: Some("Intermediate".to_string()),
        client_region: None,
        payment_method: None,
        jobs_completed: Some(50.0),
        hourly_rate: Some(25.0),
        job_success_rate: Some(85.0),
        client_rating: Some(4.5),
        job_duration_days: Some(15.0),
        project_type: Some("Hourly".to_string()),
        rehire_rate: Some(60.0),
        marketing_spend: Some(100.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_form_values() {
        let form = PredictionForm::new();
        assert_eq!(form.model, ModelKind::RandomForest);
        assert_eq!(form.features.job_category.as_deref(), Some("Web Development"));
        assert_eq!(form.features.hourly_rate, Some(25.0));
        assert_eq!(form.features.client_rating, Some(4.5));
    }

    #[test]
    fn test_option_lists_match_core_constants() {
        assert_eq!(PredictionForm::job_category_options(), JOB_CATEGORIES);
        assert_eq!(PredictionForm::experience_level_options(), EXPERIENCE_LEVELS);
    }

    #[test]
    fn test_fallback_prediction_is_labeled() {
        let error = Error::PredictionUnavailable {
            attempts: vec!["plain JSON body: 404".to_string()],
        };
        let prediction = fallback_prediction(ModelKind::Logistic, &error);

        assert_eq!(prediction.model_used, "logistic");
        assert_eq!(prediction.predicted_class, PredictedClass::No);
        assert_eq!(prediction.probability_yes, 0.0);
        assert_eq!(prediction.probability_no, 1.0);
        assert!(prediction.error.as_deref().unwrap_or("").contains("404"));
        assert!(is_fallback(&prediction));
    }

    #[test]
    fn test_real_prediction_is_not_fallback() {
        let prediction = Prediction {
            model_used: "rf".to_string(),
            predicted_class: PredictedClass::Yes,
            probability_yes: 0.8,
            probability_no: 0.2,
            error: None,
            note: None,
        };
        assert!(!is_fallback(&prediction));
    }
}
