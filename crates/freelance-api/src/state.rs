//! Application state management

use crate::dataset;
use freelance_core::Config;
use freelance_core::types::IncomeRecord;
use freelance_model::{HeuristicClassifier, HighEarnerClassifier};
use std::sync::Arc;

/// Shared application state
///
/// The provider is stateless across requests: the synthetic dataset is built
/// once here and every aggregate is recomputed from it per request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Config,
    /// The in-memory dataset all statistics are computed over
    pub records: Arc<Vec<IncomeRecord>>,
    /// Classifier behind the predict endpoints
    pub classifier: Arc<dyn HighEarnerClassifier>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("records", &self.records.len())
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create application state with the live heuristic classifier
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_classifier(config, Arc::new(HeuristicClassifier::new()))
    }

    /// Create application state with an explicit classifier implementation
    ///
    /// Tests substitute a deterministic classifier here to make the
    /// probabilistic predict assertions exact.
    #[must_use]
    pub fn with_classifier(config: Config, classifier: Arc<dyn HighEarnerClassifier>) -> Self {
        let records = Arc::new(dataset::synthesize(&config.dataset));
        Self {
            config,
            records,
            classifier,
        }
    }

    /// All non-missing earnings values, in record order
    #[must_use]
    pub fn earnings(&self) -> Vec<f64> {
        self.records
            .iter()
            .filter_map(|record| record.earnings_usd)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use freelance_model::ScriptedClassifier;
    use pretty_assertions::assert_eq;

    fn seeded_config() -> Config {
        let mut config = Config::default();
        config.dataset.size = 30;
        config.dataset.seed = Some(11);
        config
    }

    #[test]
    fn test_state_builds_dataset_from_config() {
        let state = AppState::new(seeded_config());
        assert_eq!(state.records.len(), 30);
        assert_eq!(state.earnings().len(), 30);
    }

    #[test]
    fn test_state_accepts_substitute_classifier() {
        let state =
            AppState::with_classifier(seeded_config(), Arc::new(ScriptedClassifier::new()));
        assert_eq!(state.records.len(), 30);
        // Debug formatting includes the substituted classifier
        assert!(format!("{state:?}").contains("ScriptedClassifier"));
    }

    #[test]
    fn test_clone_shares_dataset() {
        let state = AppState::new(seeded_config());
        let cloned = state.clone();
        assert!(Arc::ptr_eq(&state.records, &cloned.records));
    }
}
