//! HTTP client for the freelancer income analytics API
//!
//! Wraps every provider endpoint behind a typed fetch method. The base URL
//! is explicit constructor input so tests can point the client at a fake
//! server. Two endpoints need reshaping on the client side: the scalar
//! summary is derived from the distribution payload, and the normalized-data
//! listing has no dedicated endpoint at all (see [`ApiClient::normalized_data`]).

#![forbid(unsafe_code)]

pub mod predict;

pub use predict::PredictEncoding;

use freelance_core::types::{
    ChartData, ChartDataset, EarningsDistribution, ExperienceLevelBreakdown, IncomeRecord,
    JobCategoryEarnings, JobCategoryShare, JobIncome, JobsVsEarnings, ModelComparison, ModelInfo,
    SummaryStatistics,
};
use freelance_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

/// API client for making HTTP requests to the analytics provider
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new API client against an explicit base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// The base URL this client talks to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Check provider availability
    ///
    /// Never fails: any transport or status failure reads as "unavailable".
    pub async fn health(&self) -> bool {
        match self.get_json::<serde_json::Value>("/health").await {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "health check failed");
                false
            }
        }
    }

    /// Fetch the full record listing
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn clean_data(&self) -> Result<Vec<IncomeRecord>> {
        self.get_json("/clean_data").await
    }

    /// Fetch the normalized record listing
    ///
    /// The provider has no normalized-data endpoint; this probes `/health`
    /// for connectivity and substitutes an empty sequence, which callers
    /// render as the explicit empty state.
    ///
    /// # Errors
    ///
    /// Returns a transport error if even the health probe fails.
    pub async fn normalized_data(&self) -> Result<Vec<IncomeRecord>> {
        self.get_json::<serde_json::Value>("/health").await?;
        warn!("no normalized data endpoint available, returning empty sequence");
        Ok(Vec::new())
    }

    /// Fetch the earnings distribution payload
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn earnings_distribution(&self) -> Result<EarningsDistribution> {
        self.get_json("/data/earnings_distribution").await
    }

    /// Fetch the scalar earnings summary
    ///
    /// Derived from the distribution payload because the dedicated summary
    /// endpoint predates the distribution one; missing statistics fields
    /// default to zero rather than failing.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the distribution request fails.
    pub async fn summary(&self) -> Result<SummaryStatistics> {
        let distribution = self.earnings_distribution().await?;
        Ok(SummaryStatistics {
            mean_income: distribution.statistics.mean,
            median_income: distribution.statistics.median,
            min_income: distribution.statistics.min,
            max_income: distribution.statistics.max,
        })
    }

    /// Fetch per-category earnings aggregates
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn earnings_by_job_category(&self) -> Result<Vec<JobCategoryEarnings>> {
        self.get_json("/data/earnings_by_job_category").await
    }

    /// Fetch per-category average income rows, reshaped for the bar chart
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn income_by_job(&self) -> Result<Vec<JobIncome>> {
        let aggregates = self.earnings_by_job_category().await?;
        Ok(aggregates
            .into_iter()
            .map(|entry| JobIncome {
                job_category: entry.job_category,
                avg_income: entry.mean,
            })
            .collect())
    }

    /// Fetch per-category counts and shares
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn job_category_distribution(&self) -> Result<Vec<JobCategoryShare>> {
        self.get_json("/data/job_category_distribution").await
    }

    /// Fetch per-experience-level aggregates
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn experience_level_distribution(&self) -> Result<Vec<ExperienceLevelBreakdown>> {
        self.get_json("/data/experience_level_distribution").await
    }

    /// Fetch the jobs-completed vs earnings payload
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn jobs_vs_earnings(&self) -> Result<JobsVsEarnings> {
        self.get_json("/data/jobs_completed_vs_earnings").await
    }

    /// Fetch the model comparison payload
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn model_comparison(&self) -> Result<ModelComparison> {
        self.get_json("/data/model_comparison").await
    }

    /// Fetch metadata for one model stub
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn model_info(&self, model_type: &str) -> Result<ModelInfo> {
        self.get_json(&format!("/model_info/{model_type}")).await
    }

    /// Chart data for the per-category income bar chart (mean and median)
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn job_income_chart(&self) -> Result<ChartData> {
        let aggregates = self.earnings_by_job_category().await?;
        Ok(ChartData {
            labels: aggregates.iter().map(|e| e.job_category.clone()).collect(),
            datasets: vec![
                ChartDataset {
                    label: "Mean income".to_string(),
                    data: aggregates.iter().map(|e| e.mean).collect(),
                },
                ChartDataset {
                    label: "Median income".to_string(),
                    data: aggregates.iter().map(|e| e.median).collect(),
                },
            ],
        })
    }

    /// Chart data for the category share pie chart
    ///
    /// Uses the percentage when present and falls back to the raw count.
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn category_share_chart(&self) -> Result<ChartData> {
        let shares = self.job_category_distribution().await?;
        Ok(ChartData {
            labels: shares.iter().map(|s| s.job_category.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Job categories".to_string(),
                data: shares
                    .iter()
                    .map(|s| if s.percentage > 0.0 { s.percentage } else { s.n as f64 })
                    .collect(),
            }],
        })
    }

    /// Chart data for the experience level breakdown
    ///
    /// # Errors
    ///
    /// Returns a transport error if the request fails or a shape error if the
    /// response cannot be parsed.
    pub async fn experience_chart(&self) -> Result<ChartData> {
        let levels = self.experience_level_distribution().await?;
        Ok(ChartData {
            labels: levels.iter().map(|l| l.experience_level.clone()).collect(),
            datasets: vec![ChartDataset {
                label: "Freelancers".to_string(),
                data: levels.iter().map(|l| l.count as f64).collect(),
            }],
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::transport(format!("GET {path}"), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                format!("GET {path}"),
                format!("API returned error: {status}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::shape(path, e.to_string()))
    }

    pub(crate) async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "POST");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::transport(format!("POST {path}"), e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::transport(
                format!("POST {path}"),
                format!("API returned error: {status}"),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| Error::shape(path, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000///");
        assert_eq!(client.base_url(), "http://localhost:8000");

        let untouched = ApiClient::new("http://localhost:8000");
        assert_eq!(untouched.base_url(), "http://localhost:8000");
    }
}
