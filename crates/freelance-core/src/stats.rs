//! Descriptive statistics kernel
//!
//! Every aggregate the provider serves is recomputed from the in-memory
//! dataset on each request, so these routines stay allocation-light and
//! operate on plain `f64` slices. Quantiles use linear interpolation
//! between closest ranks (R type 7), matching the upstream R analysis.

use crate::types::{FiveNumberSummary, HistogramBin, RegressionSummary};

/// Arithmetic mean; 0.0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation; 0.0 for fewer than two observations
#[must_use]
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Quantile of an already-sorted slice, `q` in [0, 1]
///
/// Linear interpolation between the two closest ranks. Returns 0.0 for an
/// empty slice.
#[must_use]
pub fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Median of an unsorted slice
#[must_use]
pub fn median(values: &[f64]) -> f64 {
    let sorted = sorted_copy(values);
    quantile_sorted(&sorted, 0.5)
}

/// Five-number summary of an unsorted slice
///
/// The result is always non-decreasing from `min` through `max`; an empty
/// input yields the all-zero summary.
#[must_use]
pub fn five_number_summary(values: &[f64]) -> FiveNumberSummary {
    let sorted = sorted_copy(values);
    if sorted.is_empty() {
        return FiveNumberSummary::default();
    }
    FiveNumberSummary {
        min: sorted[0],
        q1: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q3: quantile_sorted(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
    }
}

/// Observations beyond the 1.5 * IQR fences
#[must_use]
pub fn iqr_outliers(values: &[f64], summary: &FiveNumberSummary) -> Vec<f64> {
    let iqr = summary.q3 - summary.q1;
    let lower = summary.q1 - 1.5 * iqr;
    let upper = summary.q3 + 1.5 * iqr;
    let mut outliers: Vec<f64> = values
        .iter()
        .copied()
        .filter(|v| *v < lower || *v > upper)
        .collect();
    outliers.sort_by(f64::total_cmp);
    outliers
}

/// Equal-width histogram over `bins` bins
///
/// Each bin carries its lower bound; the final bin is closed on the right so
/// the maximum observation is counted. Degenerate inputs (empty slice, zero
/// bins, or zero range) collapse to a single bin holding everything.
#[must_use]
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() {
        return Vec::new();
    }
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;

    if bins == 0 || range <= 0.0 {
        return vec![HistogramBin {
            x: min,
            y: values.len() as u64,
        }];
    }

    let width = range / bins as f64;
    let mut counts = vec![0u64; bins];
    for value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, y)| HistogramBin {
            x: min + i as f64 * width,
            y,
        })
        .collect()
}

/// Pearson correlation coefficient; 0.0 when either variance vanishes
#[must_use]
pub fn pearson_correlation(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return 0.0;
    }
    let xs = &xs[..n];
    let ys = &ys[..n];
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx).powi(2);
        var_y += (y - my).powi(2);
    }

    if var_x <= 0.0 || var_y <= 0.0 {
        return 0.0;
    }
    cov / (var_x.sqrt() * var_y.sqrt())
}

/// Ordinary least squares fit of `ys` on `xs`
///
/// Returns the all-zero summary when the input is degenerate (fewer than two
/// points or zero x-variance); callers render that as an absent fit.
#[must_use]
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> RegressionSummary {
    let n = xs.len().min(ys.len());
    if n < 2 {
        return RegressionSummary::default();
    }
    let xs = &xs[..n];
    let ys = &ys[..n];
    let mx = mean(xs);
    let my = mean(ys);

    let mut cov = 0.0;
    let mut var_x = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        var_x += (x - mx).powi(2);
    }

    if var_x <= 0.0 {
        return RegressionSummary::default();
    }

    let slope = cov / var_x;
    let intercept = my - slope * mx;
    let r = pearson_correlation(xs, ys);

    RegressionSummary {
        intercept,
        slope,
        r_squared: r * r,
    }
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}
