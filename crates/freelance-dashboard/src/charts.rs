//! Chart adapters
//!
//! Pure functions from `(entity, loading flag)` to a render description.
//! While a fetch is in flight they produce a skeleton placeholder; a missing
//! or degenerate entity produces an explicit empty state; missing optional
//! sub-fields are substituted with `"N/A"` or zero, never panicked on.

use freelance_core::types::{
    ChartData, ChartDataset, EarningsDistribution, ExperienceLevelBreakdown,
    JobCategoryEarnings, JobCategoryShare, JobsVsEarnings, ModelComparison, SummaryStatistics,
};

/// Placeholder label for missing categorical values
pub const MISSING_LABEL: &str = "N/A";

/// Render description for a chart slot
#[derive(Debug, Clone, PartialEq)]
pub enum ChartView {
    /// Fetch in flight: render a skeleton placeholder
    Skeleton,
    /// Fetch finished with nothing to draw
    Empty,
    /// Chart data ready to hand to the charting layer
    Ready(ChartData),
}

impl ChartView {
    /// Whether this view carries drawable data
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Summary tiles for the scalar earnings overview
#[must_use]
pub fn summary_tiles(data: Option<&SummaryStatistics>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(summary) = data else {
        return ChartView::Empty;
    };

    ChartView::Ready(ChartData {
        labels: vec![
            "Mean income".to_string(),
            "Median income".to_string(),
            "Minimum income".to_string(),
            "Maximum income".to_string(),
        ],
        datasets: vec![ChartDataset {
            label: "Earnings (USD)".to_string(),
            data: vec![
                summary.mean_income,
                summary.median_income,
                summary.min_income,
                summary.max_income,
            ],
        }],
    })
}

/// Histogram of the earnings distribution
#[must_use]
pub fn histogram_chart(data: Option<&EarningsDistribution>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(distribution) = data else {
        return ChartView::Empty;
    };
    if distribution.histogram.is_empty() {
        return ChartView::Empty;
    }

    ChartView::Ready(ChartData {
        labels: distribution
            .histogram
            .iter()
            .map(|bin| format!("{:.0}", bin.x))
            .collect(),
        datasets: vec![ChartDataset {
            label: "Freelancers".to_string(),
            data: distribution.histogram.iter().map(|bin| bin.y as f64).collect(),
        }],
    })
}

/// Grouped bars of mean and median earnings per job category
#[must_use]
pub fn job_income_chart(data: Option<&[JobCategoryEarnings]>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(aggregates) = data.filter(|entries| !entries.is_empty()) else {
        return ChartView::Empty;
    };

    ChartView::Ready(ChartData {
        labels: aggregates
            .iter()
            .map(|entry| label_or_missing(&entry.job_category))
            .collect(),
        datasets: vec![
            ChartDataset {
                label: "Mean income".to_string(),
                data: aggregates.iter().map(|entry| entry.mean).collect(),
            },
            ChartDataset {
                label: "Median income".to_string(),
                data: aggregates.iter().map(|entry| entry.median).collect(),
            },
        ],
    })
}

/// Pie of the per-category dataset share
///
/// Uses the percentage when present and falls back to the raw count.
#[must_use]
pub fn category_pie(data: Option<&[JobCategoryShare]>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(shares) = data.filter(|entries| !entries.is_empty()) else {
        return ChartView::Empty;
    };

    ChartView::Ready(ChartData {
        labels: shares
            .iter()
            .map(|share| label_or_missing(&share.job_category))
            .collect(),
        datasets: vec![ChartDataset {
            label: "Share".to_string(),
            data: shares
                .iter()
                .map(|share| {
                    if share.percentage > 0.0 {
                        share.percentage
                    } else {
                        share.n as f64
                    }
                })
                .collect(),
        }],
    })
}

/// Bars of count and mean earnings per experience level
#[must_use]
pub fn experience_chart(data: Option<&[ExperienceLevelBreakdown]>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(levels) = data.filter(|entries| !entries.is_empty()) else {
        return ChartView::Empty;
    };

    ChartView::Ready(ChartData {
        labels: levels
            .iter()
            .map(|level| label_or_missing(&level.experience_level))
            .collect(),
        datasets: vec![
            ChartDataset {
                label: "Freelancers".to_string(),
                data: levels.iter().map(|level| level.count as f64).collect(),
            },
            ChartDataset {
                label: "Mean earnings".to_string(),
                data: levels.iter().map(|level| level.mean_earnings).collect(),
            },
            ChartDataset {
                label: "High earner %".to_string(),
                data: levels
                    .iter()
                    .map(|level| level.high_earner_percentage)
                    .collect(),
            },
        ],
    })
}

/// Scatter of jobs completed against earnings, with the fitted line overlaid
///
/// Points missing either coordinate are dropped; a missing experience level
/// renders the `"N/A"` label.
#[must_use]
pub fn scatter_chart(data: Option<&JobsVsEarnings>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(payload) = data else {
        return ChartView::Empty;
    };

    let points: Vec<(f64, f64, String)> = payload
        .scatter_data
        .iter()
        .filter_map(|point| {
            let x = point.jobs_completed?;
            let y = point.earnings_usd?;
            let label = point
                .experience_level
                .clone()
                .unwrap_or_else(|| MISSING_LABEL.to_string());
            Some((x, y, label))
        })
        .collect();

    if points.is_empty() {
        return ChartView::Empty;
    }

    let fitted: Vec<f64> = points
        .iter()
        .map(|(x, _, _)| payload.regression.intercept + payload.regression.slope * x)
        .collect();

    ChartView::Ready(ChartData {
        labels: points.iter().map(|(_, _, label)| label.clone()).collect(),
        datasets: vec![
            ChartDataset {
                label: "Jobs completed".to_string(),
                data: points.iter().map(|(x, _, _)| *x).collect(),
            },
            ChartDataset {
                label: "Earnings (USD)".to_string(),
                data: points.iter().map(|(_, y, _)| *y).collect(),
            },
            ChartDataset {
                label: format!("Fit (r = {:.2})", payload.correlation),
                data: fitted,
            },
        ],
    })
}

/// Grouped bars of the stub metrics per model
#[must_use]
pub fn model_comparison_chart(data: Option<&ModelComparison>, loading: bool) -> ChartView {
    if loading {
        return ChartView::Skeleton;
    }
    let Some(comparison) = data.filter(|c| !c.performance.is_empty()) else {
        return ChartView::Empty;
    };

    ChartView::Ready(ChartData {
        labels: comparison
            .performance
            .iter()
            .map(|row| label_or_missing(&row.model))
            .collect(),
        datasets: vec![
            ChartDataset {
                label: "Accuracy".to_string(),
                data: comparison.performance.iter().map(|r| r.accuracy).collect(),
            },
            ChartDataset {
                label: "Precision".to_string(),
                data: comparison.performance.iter().map(|r| r.precision).collect(),
            },
            ChartDataset {
                label: "F1".to_string(),
                data: comparison.performance.iter().map(|r| r.f1_score).collect(),
            },
            ChartDataset {
                label: "AUC".to_string(),
                data: comparison.performance.iter().map(|r| r.auc).collect(),
            },
        ],
    })
}

fn label_or_missing(label: &str) -> String {
    if label.is_empty() {
        MISSING_LABEL.to_string()
    } else {
        label.to_string()
    }
}
