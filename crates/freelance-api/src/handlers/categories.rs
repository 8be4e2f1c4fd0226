//! Category and experience-level aggregate endpoints

use crate::state::AppState;
use axum::extract::State;
use axum::response::Json;
use freelance_core::stats;
use freelance_core::types::{
    ExperienceLevelBreakdown, IncomeRecord, JobCategoryEarnings, JobCategoryShare,
};
use std::sync::Arc;
use tracing::info;

/// `GET /data/earnings_by_job_category`: per-category earnings aggregates
pub async fn earnings_by_job_category(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<JobCategoryEarnings>> {
    let groups = group_earnings(&state.records, |record| record.job_category.as_deref());
    let aggregates: Vec<JobCategoryEarnings> = groups
        .into_iter()
        .map(|(category, earnings)| {
            let summary = stats::five_number_summary(&earnings);
            JobCategoryEarnings {
                job_category: category,
                min: summary.min,
                q1: summary.q1,
                median: summary.median,
                q3: summary.q3,
                max: summary.max,
                mean: stats::mean(&earnings),
                sd: stats::sample_std_dev(&earnings),
                count: earnings.len() as u64,
            }
        })
        .collect();

    info!(categories = aggregates.len(), "serving category earnings");
    Json(aggregates)
}

/// `GET /data/job_category_distribution`: per-category counts and shares
pub async fn job_category_distribution(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<JobCategoryShare>> {
    let groups = group_earnings(&state.records, |record| record.job_category.as_deref());
    let total: usize = groups.iter().map(|(_, earnings)| earnings.len()).sum();

    let shares = groups
        .into_iter()
        .map(|(category, earnings)| JobCategoryShare {
            job_category: category,
            n: earnings.len() as u64,
            percentage: if total == 0 {
                0.0
            } else {
                earnings.len() as f64 / total as f64 * 100.0
            },
        })
        .collect();

    Json(shares)
}

/// `GET /data/experience_level_distribution`: per-level aggregates with the
/// high-earner rate
///
/// A record counts as a high earner when its earnings are strictly above the
/// dataset-wide median.
pub async fn experience_level_distribution(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<ExperienceLevelBreakdown>> {
    let overall_median = stats::median(&state.earnings());
    let groups = group_earnings(&state.records, |record| record.experience_level.as_deref());

    let breakdown = groups
        .into_iter()
        .map(|(level, earnings)| {
            let high_earner_count =
                earnings.iter().filter(|e| **e > overall_median).count() as u64;
            let count = earnings.len() as u64;
            ExperienceLevelBreakdown {
                experience_level: level,
                count,
                high_earner_count,
                high_earner_percentage: if count == 0 {
                    0.0
                } else {
                    high_earner_count as f64 / count as f64 * 100.0
                },
                mean_earnings: stats::mean(&earnings),
                median_earnings: stats::median(&earnings),
            }
        })
        .collect();

    Json(breakdown)
}

/// Group earnings values by a record key, preserving first-seen key order
///
/// Records missing the key or the earnings value are skipped.
fn group_earnings<F>(records: &[IncomeRecord], key: F) -> Vec<(String, Vec<f64>)>
where
    F: Fn(&IncomeRecord) -> Option<&str>,
{
    let mut groups: Vec<(String, Vec<f64>)> = Vec::new();
    for record in records {
        let (Some(key), Some(earnings)) = (key(record), record.earnings_usd) else {
            continue;
        };
        match groups.iter_mut().find(|(existing, _)| existing == key) {
            Some((_, values)) => values.push(earnings),
            None => groups.push((key.to_string(), vec![earnings])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(category: &str, level: &str, earnings: f64) -> IncomeRecord {
        IncomeRecord {
            job_category: Some(category.to_string()),
            experience_level: Some(level.to_string()),
            earnings_usd: Some(earnings),
            ..IncomeRecord::default()
        }
    }

    #[test]
    fn test_group_earnings_preserves_first_seen_order() {
        let records = vec![
            record("Design", "Beginner", 100.0),
            record("Writing", "Expert", 200.0),
            record("Design", "Expert", 300.0),
        ];

        let groups = group_earnings(&records, |r| r.job_category.as_deref());
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Design");
        assert_eq!(groups[0].1, vec![100.0, 300.0]);
        assert_eq!(groups[1].0, "Writing");
    }

    #[test]
    fn test_group_earnings_skips_incomplete_records() {
        let records = vec![
            record("Design", "Beginner", 100.0),
            IncomeRecord {
                job_category: Some("Design".to_string()),
                ..IncomeRecord::default()
            },
            IncomeRecord {
                earnings_usd: Some(500.0),
                ..IncomeRecord::default()
            },
        ];

        let groups = group_earnings(&records, |r| r.job_category.as_deref());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].1, vec![100.0]);
    }

    #[test]
    fn test_share_percentages_sum_to_one_hundred() {
        let records = vec![
            record("A", "Beginner", 1.0),
            record("A", "Beginner", 2.0),
            record("B", "Beginner", 3.0),
            record("C", "Beginner", 4.0),
        ];
        let groups = group_earnings(&records, |r| r.job_category.as_deref());
        let total: usize = groups.iter().map(|(_, e)| e.len()).sum();

        let sum: f64 = groups
            .iter()
            .map(|(_, e)| e.len() as f64 / total as f64 * 100.0)
            .sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_high_earner_threshold_is_strict() {
        // Earnings equal to the median do not count as high earners
        let earnings = [1.0, 2.0, 3.0];
        let median = stats::median(&earnings);
        let high: Vec<f64> = earnings.iter().copied().filter(|e| *e > median).collect();
        assert_eq!(high, vec![3.0]);
    }
}
