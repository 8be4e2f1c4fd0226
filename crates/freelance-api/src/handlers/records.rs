//! Record listing and legacy scalar summary endpoints

use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use freelance_core::stats;
use freelance_core::types::{IncomeRecord, SummaryStatistics};
use std::sync::Arc;
use tracing::info;

/// `GET /clean_data`: the full record listing
pub async fn list_records(State(state): State<Arc<AppState>>) -> Json<Vec<IncomeRecord>> {
    info!(count = state.records.len(), "serving record listing");
    Json(state.records.as_ref().clone())
}

/// `GET /summary`: legacy scalar earnings summary
///
/// Array-wrapped single element for compatibility with the original wire
/// format. Recomputed from the dataset on every call.
pub async fn summary(State(state): State<Arc<AppState>>) -> Json<Vec<SummaryStatistics>> {
    let earnings = state.earnings();
    let summary = compute_summary(&earnings);
    Json(vec![summary])
}

/// Compute the scalar summary over a set of earnings values
#[must_use]
pub fn compute_summary(earnings: &[f64]) -> SummaryStatistics {
    if earnings.is_empty() {
        return SummaryStatistics::default();
    }
    SummaryStatistics {
        mean_income: stats::mean(earnings),
        median_income: stats::median(earnings),
        min_income: earnings.iter().copied().fold(f64::INFINITY, f64::min),
        max_income: earnings.iter().copied().fold(f64::NEG_INFINITY, f64::max),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_compute_summary_known_values() {
        let earnings = [500.0, 3200.5, 4850.75, 15000.0];
        let summary = compute_summary(&earnings);

        assert_eq!(summary.min_income, 500.0);
        assert_eq!(summary.max_income, 15000.0);
        assert!((summary.median_income - 4025.625).abs() < 1e-9);
        assert!(summary.min_income <= summary.median_income);
        assert!(summary.median_income <= summary.max_income);
    }

    #[test]
    fn test_compute_summary_empty_is_zero() {
        assert_eq!(compute_summary(&[]), SummaryStatistics::default());
    }

    #[test]
    fn test_compute_summary_single_value() {
        let summary = compute_summary(&[1200.0]);
        assert_eq!(summary.mean_income, 1200.0);
        assert_eq!(summary.median_income, 1200.0);
        assert_eq!(summary.min_income, 1200.0);
        assert_eq!(summary.max_income, 1200.0);
    }
}
