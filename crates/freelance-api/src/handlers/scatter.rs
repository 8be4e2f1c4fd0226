//! Jobs-completed vs earnings endpoint

use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use freelance_core::stats;
use freelance_core::types::{IncomeRecord, JobsVsEarnings, ScatterPoint};
use std::sync::Arc;
use tracing::info;

/// `GET /data/jobs_completed_vs_earnings`: scatter observations plus the
/// correlation coefficient and least-squares fit
pub async fn jobs_vs_earnings(State(state): State<Arc<AppState>>) -> Json<JobsVsEarnings> {
    let payload = compute_scatter(&state.records);
    info!(
        points = payload.scatter_data.len(),
        correlation = payload.correlation,
        "serving jobs vs earnings"
    );
    Json(payload)
}

/// Build the scatter payload from records carrying both coordinates
#[must_use]
pub fn compute_scatter(records: &[IncomeRecord]) -> JobsVsEarnings {
    let scatter_data: Vec<ScatterPoint> = records
        .iter()
        .filter(|record| record.jobs_completed.is_some() && record.earnings_usd.is_some())
        .map(|record| ScatterPoint {
            jobs_completed: record.jobs_completed,
            earnings_usd: record.earnings_usd,
            experience_level: record.experience_level.clone(),
        })
        .collect();

    let xs: Vec<f64> = scatter_data
        .iter()
        .filter_map(|point| point.jobs_completed)
        .collect();
    let ys: Vec<f64> = scatter_data
        .iter()
        .filter_map(|point| point.earnings_usd)
        .collect();

    JobsVsEarnings {
        correlation: stats::pearson_correlation(&xs, &ys),
        regression: stats::linear_regression(&xs, &ys),
        scatter_data,
    }
}
