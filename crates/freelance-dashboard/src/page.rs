//! Dashboard page orchestrator
//!
//! Issues the section fetches in a fixed declared order and tracks one
//! loading flag per section, so sections render progressively as their
//! fetches resolve. Errors are isolated per section: a failed fetch marks
//! only its own section and contributes to a single page-level banner, and
//! every later section still loads.

use crate::table::{DataTable, Row};
use freelance_client::ApiClient;
use freelance_core::Result;
use freelance_core::types::{
    EarningsDistribution, ExperienceLevelBreakdown, IncomeRecord, JobCategoryEarnings,
    JobCategoryShare, JobsVsEarnings, ModelComparison, SummaryStatistics,
};
use tracing::warn;

/// One dashboard section's fetch state
#[derive(Debug, Clone)]
pub struct Section<T> {
    /// Whether the section's fetch is still in flight
    pub loading: bool,
    /// Fetched data, absent until the fetch resolves successfully
    pub data: Option<T>,
    /// The section's own error, absent unless its fetch failed
    pub error: Option<String>,
}

impl<T> Default for Section<T> {
    fn default() -> Self {
        Self {
            loading: true,
            data: None,
            error: None,
        }
    }
}

impl<T> Section<T> {
    /// Resolve the section with a fetch result, clearing the loading flag
    ///
    /// Returns the error message, if any, for banner aggregation.
    pub fn resolve(&mut self, result: Result<T>) -> Option<String> {
        self.loading = false;
        match result {
            Ok(data) => {
                self.data = Some(data);
                None
            }
            Err(e) => {
                let message = e.to_string();
                self.error = Some(message.clone());
                Some(message)
            }
        }
    }

    /// Whether the section resolved with data
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.data.is_some()
    }
}

/// The dashboard page: one section per visualization
#[derive(Debug, Clone, Default)]
pub struct DashboardPage {
    /// Raw record listing backing the data table
    pub records: Section<Vec<IncomeRecord>>,
    /// Scalar earnings summary tiles
    pub summary: Section<SummaryStatistics>,
    /// Earnings distribution histogram
    pub distribution: Section<EarningsDistribution>,
    /// Per-category earnings bars
    pub job_income: Section<Vec<JobCategoryEarnings>>,
    /// Category share pie
    pub category_share: Section<Vec<JobCategoryShare>>,
    /// Experience level breakdown
    pub experience: Section<Vec<ExperienceLevelBreakdown>>,
    /// Jobs vs earnings scatter
    pub scatter: Section<JobsVsEarnings>,
    /// Model comparison charts
    pub model_comparison: Section<ModelComparison>,
    /// Page-level error banner: the first section failure, if any
    pub error_banner: Option<String>,
}

impl DashboardPage {
    /// Create a page with every section in the loading state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch every section in the declared order
    ///
    /// Sections resolve one at a time; callers that render between awaits
    /// see earlier sections ready while later ones still report loading.
    pub async fn load(client: &ApiClient) -> Self {
        let mut page = Self::new();

        // The table data loads first so the grid renders as early as possible
        let result = client.clean_data().await;
        let error = page.records.resolve(result);
        page.note(error);

        let result = client.summary().await;
        let error = page.summary.resolve(result);
        page.note(error);

        let result = client.earnings_distribution().await;
        let error = page.distribution.resolve(result);
        page.note(error);

        let result = client.earnings_by_job_category().await;
        let error = page.job_income.resolve(result);
        page.note(error);

        let result = client.job_category_distribution().await;
        let error = page.category_share.resolve(result);
        page.note(error);

        let result = client.experience_level_distribution().await;
        let error = page.experience.resolve(result);
        page.note(error);

        let result = client.jobs_vs_earnings().await;
        let error = page.scatter.resolve(result);
        page.note(error);

        let result = client.model_comparison().await;
        let error = page.model_comparison.resolve(result);
        page.note(error);

        page
    }

    /// Build the paginated table over the fetched records
    #[must_use]
    pub fn records_table(&self) -> DataTable {
        let mut table = DataTable::new();
        table.set_loading(self.records.loading);
        if let Some(records) = &self.records.data {
            table.set_rows(records_to_rows(records));
        }
        table
    }

    /// Number of sections that resolved with data
    #[must_use]
    pub fn loaded_sections(&self) -> usize {
        usize::from(self.records.is_loaded())
            + usize::from(self.summary.is_loaded())
            + usize::from(self.distribution.is_loaded())
            + usize::from(self.job_income.is_loaded())
            + usize::from(self.category_share.is_loaded())
            + usize::from(self.experience.is_loaded())
            + usize::from(self.scatter.is_loaded())
            + usize::from(self.model_comparison.is_loaded())
    }

    fn note(&mut self, error: Option<String>) {
        if let Some(message) = error {
            warn!(%message, "section fetch failed");
            if self.error_banner.is_none() {
                self.error_banner = Some(message);
            }
        }
    }
}

/// Serialize records into generic table rows
fn records_to_rows(records: &[IncomeRecord]) -> Vec<Row> {
    records
        .iter()
        .filter_map(|record| match serde_json::to_value(record) {
            Ok(serde_json::Value::Object(map)) => Some(map),
            _ => None,
        })
        .collect()
}
