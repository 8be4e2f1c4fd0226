//! Earnings distribution endpoint

use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use freelance_core::stats;
use freelance_core::types::{BoxplotSummary, DistributionStatistics, EarningsDistribution};
use std::sync::Arc;
use tracing::info;

/// `GET /data/earnings_distribution`: histogram, boxplot and statistics
pub async fn earnings_distribution(
    State(state): State<Arc<AppState>>,
) -> Json<EarningsDistribution> {
    let earnings = state.earnings();
    let distribution = compute_distribution(&earnings, state.config.dataset.histogram_bins);
    info!(
        bins = distribution.histogram.len(),
        outliers = distribution.boxplot.outliers.len(),
        "serving earnings distribution"
    );
    Json(distribution)
}

/// Compute the distribution payload for a set of earnings values
#[must_use]
pub fn compute_distribution(earnings: &[f64], bins: usize) -> EarningsDistribution {
    let summary = stats::five_number_summary(earnings);
    let outliers = stats::iqr_outliers(earnings, &summary);

    EarningsDistribution {
        histogram: stats::histogram(earnings, bins),
        boxplot: BoxplotSummary { summary, outliers },
        statistics: DistributionStatistics {
            mean: stats::mean(earnings),
            median: summary.median,
            min: summary.min,
            max: summary.max,
            sd: stats::sample_std_dev(earnings),
            q1: summary.q1,
            q3: summary.q3,
        },
    }
}
