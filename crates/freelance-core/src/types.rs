//! Core data types for the freelancer analytics service
//!
//! Wire shapes follow the upstream dashboard contract: record-level fields
//! are PascalCase (`JobCategory`, `EarningsUSD`), aggregate fields are
//! lowercase. Every payload is plain JSON and every entity is request-scoped.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Job categories recognized by the synthetic dataset and the prediction form
pub const JOB_CATEGORIES: [&str; 8] = [
    "Web Development",
    "App Development",
    "Content Writing",
    "Data Entry",
    "Digital Marketing",
    "Graphic Design",
    "Customer Support",
    "Video Editing",
];

/// Freelance platforms
pub const PLATFORMS: [&str; 5] = ["Upwork", "Fiverr", "Freelancer", "Toptal", "PeoplePerHour"];

/// Experience levels, ordered from junior to senior
pub const EXPERIENCE_LEVELS: [&str; 3] = ["Beginner", "Intermediate", "Expert"];

/// Client regions
pub const CLIENT_REGIONS: [&str; 6] = [
    "North America",
    "Europe",
    "Asia",
    "South America",
    "Oceania",
    "Africa",
];

/// Payment methods
pub const PAYMENT_METHODS: [&str; 4] = ["PayPal", "Bank Transfer", "Credit Card", "Other"];

/// Project billing types
pub const PROJECT_TYPES: [&str; 2] = ["Hourly", "Fixed"];

/// One freelancer observation
///
/// All fields are optional: upstream exports are sparse and rows with unknown
/// extra keys must still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeRecord {
    /// Freelancer identifier
    #[serde(rename = "FreelancerID", skip_serializing_if = "Option::is_none")]
    pub freelancer_id: Option<String>,

    /// Job category
    #[serde(rename = "JobCategory", skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,

    /// Platform the work was sourced through
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Experience level
    #[serde(rename = "ExperienceLevel", skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,

    /// Client region
    #[serde(rename = "ClientRegion", skip_serializing_if = "Option::is_none")]
    pub client_region: Option<String>,

    /// Payment method
    #[serde(rename = "PaymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Number of jobs completed
    #[serde(rename = "JobsCompleted", skip_serializing_if = "Option::is_none")]
    pub jobs_completed: Option<f64>,

    /// Total earnings in USD
    #[serde(rename = "EarningsUSD", skip_serializing_if = "Option::is_none")]
    pub earnings_usd: Option<f64>,

    /// Hourly rate in USD
    #[serde(rename = "HourlyRate", skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,

    /// Job success rate (0-100)
    #[serde(rename = "JobSuccessRate", skip_serializing_if = "Option::is_none")]
    pub job_success_rate: Option<f64>,

    /// Client rating (0-5)
    #[serde(rename = "ClientRating", skip_serializing_if = "Option::is_none")]
    pub client_rating: Option<f64>,

    /// Average job duration in days
    #[serde(rename = "JobDurationDays", skip_serializing_if = "Option::is_none")]
    pub job_duration_days: Option<f64>,

    /// Project billing type
    #[serde(rename = "ProjectType", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Rehire rate (0-100)
    #[serde(rename = "RehireRate", skip_serializing_if = "Option::is_none")]
    pub rehire_rate: Option<f64>,

    /// Marketing spend in USD
    #[serde(rename = "MarketingSpend", skip_serializing_if = "Option::is_none")]
    pub marketing_spend: Option<f64>,
}

/// Scalar earnings summary, recomputed per query
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    /// Mean earnings
    #[serde(default)]
    pub mean_income: f64,

    /// Median earnings
    #[serde(default)]
    pub median_income: f64,

    /// Minimum earnings
    #[serde(default)]
    pub min_income: f64,

    /// Maximum earnings
    #[serde(default)]
    pub max_income: f64,
}

/// One histogram bin: lower bound and count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Lower bound of the bin
    pub x: f64,

    /// Number of observations in the bin
    pub y: u64,
}

/// Five-number summary: must be non-decreasing from `min` through `max`
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Minimum observation
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum observation
    pub max: f64,
}

impl FiveNumberSummary {
    /// Whether the summary satisfies `min <= q1 <= median <= q3 <= max`
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.min <= self.q1 && self.q1 <= self.median && self.median <= self.q3 && self.q3 <= self.max
    }
}

/// Boxplot payload: five-number summary plus IQR-fence outliers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxplotSummary {
    /// The five-number summary, flattened onto the wire
    #[serde(flatten)]
    pub summary: FiveNumberSummary,

    /// Observations beyond the 1.5 * IQR fences
    #[serde(default)]
    pub outliers: Vec<f64>,
}

/// Scalar statistics attached to a distribution payload
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DistributionStatistics {
    /// Mean
    #[serde(default)]
    pub mean: f64,
    /// Median
    #[serde(default)]
    pub median: f64,
    /// Minimum
    #[serde(default)]
    pub min: f64,
    /// Maximum
    #[serde(default)]
    pub max: f64,
    /// Sample standard deviation
    #[serde(default)]
    pub sd: f64,
    /// First quartile
    #[serde(default)]
    pub q1: f64,
    /// Third quartile
    #[serde(default)]
    pub q3: f64,
}

/// Earnings distribution: histogram, boxplot and scalar statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EarningsDistribution {
    /// Histogram bins
    #[serde(default)]
    pub histogram: Vec<HistogramBin>,

    /// Boxplot summary
    #[serde(default)]
    pub boxplot: BoxplotSummary,

    /// Scalar statistics
    #[serde(default)]
    pub statistics: DistributionStatistics,
}

/// Per-category earnings aggregate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCategoryEarnings {
    /// Job category label
    #[serde(rename = "JobCategory")]
    pub job_category: String,

    /// Minimum earnings in the category
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median earnings
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Maximum earnings
    pub max: f64,
    /// Mean earnings
    pub mean: f64,
    /// Sample standard deviation
    pub sd: f64,
    /// Number of records in the category
    pub count: u64,
}

/// Per-category share of the dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobCategoryShare {
    /// Job category label
    #[serde(rename = "JobCategory")]
    pub job_category: String,

    /// Record count
    pub n: u64,

    /// Share of all records, in percent; shares sum to roughly 100
    pub percentage: f64,
}

/// Per-experience-level aggregate with the high-earner rate
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceLevelBreakdown {
    /// Experience level label
    #[serde(rename = "ExperienceLevel")]
    pub experience_level: String,

    /// Record count for this level
    pub count: u64,

    /// Records earning above the dataset-wide median
    pub high_earner_count: u64,

    /// High earners as a percentage of the level's records
    pub high_earner_percentage: f64,

    /// Mean earnings for the level
    pub mean_earnings: f64,

    /// Median earnings for the level
    pub median_earnings: f64,
}

/// One scatter observation for the jobs-vs-earnings view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    /// Jobs completed
    #[serde(rename = "JobsCompleted", skip_serializing_if = "Option::is_none")]
    pub jobs_completed: Option<f64>,

    /// Earnings in USD
    #[serde(rename = "EarningsUSD", skip_serializing_if = "Option::is_none")]
    pub earnings_usd: Option<f64>,

    /// Experience level used to color the point
    #[serde(rename = "ExperienceLevel", skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
}

/// Ordinary least squares fit over the scatter observations
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RegressionSummary {
    /// Intercept of the fitted line
    #[serde(default)]
    pub intercept: f64,

    /// Slope of the fitted line
    #[serde(default)]
    pub slope: f64,

    /// Coefficient of determination
    #[serde(default)]
    pub r_squared: f64,
}

/// Jobs-completed vs earnings payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobsVsEarnings {
    /// Scatter observations
    #[serde(default)]
    pub scatter_data: Vec<ScatterPoint>,

    /// Pearson correlation coefficient
    #[serde(default)]
    pub correlation: f64,

    /// Linear regression summary
    #[serde(default)]
    pub regression: RegressionSummary,
}

/// Stub metrics for one classifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelPerformance {
    /// Model identifier (`rf`, `logistic`, `tree`)
    pub model: String,
    /// Accuracy
    pub accuracy: f64,
    /// Sensitivity (recall)
    pub sensitivity: f64,
    /// Specificity
    pub specificity: f64,
    /// Precision
    pub precision: f64,
    /// F1 score
    pub f1_score: f64,
    /// Area under the ROC curve
    pub auc: f64,
}

/// One point on a ROC curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RocPoint {
    /// Specificity (1 - false positive rate)
    pub specificity: f64,
    /// Sensitivity (true positive rate)
    pub sensitivity: f64,
}

/// ROC curves keyed by model identifier
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RocCurves {
    /// Logistic regression curve
    #[serde(default)]
    pub logistic: Vec<RocPoint>,
    /// Decision tree curve
    #[serde(default)]
    pub tree: Vec<RocPoint>,
    /// Random forest curve
    #[serde(default)]
    pub rf: Vec<RocPoint>,
}

/// AUC per model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AucValues {
    /// Logistic regression AUC
    #[serde(default)]
    pub logistic: f64,
    /// Decision tree AUC
    #[serde(default)]
    pub tree: f64,
    /// Random forest AUC
    #[serde(default)]
    pub rf: f64,
}

/// Model comparison payload for the dashboard's comparison section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    /// Stub metrics per model
    #[serde(default)]
    pub performance: Vec<ModelPerformance>,

    /// ROC curves per model
    #[serde(default)]
    pub roc_curves: RocCurves,

    /// AUC values per model
    #[serde(default)]
    pub auc_values: AucValues,

    /// Error string populated by tolerant clients on partial failures
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Model metadata for `/model_info/:model_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Human readable model name
    pub model_name: String,

    /// Model identifier as requested
    pub model_type: String,

    /// Hyperparameter placeholder
    pub best_tune: serde_json::Value,

    /// Fixed cross-validation ROC score
    pub cv_roc_on_train: f64,
}

/// Input feature vector for the prediction stub
///
/// Every field is optional; the provider substitutes defaults for anything
/// missing rather than rejecting the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct FeatureVector {
    /// Job category
    #[serde(rename = "JobCategory", skip_serializing_if = "Option::is_none")]
    pub job_category: Option<String>,

    /// Platform
    #[serde(rename = "Platform", skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,

    /// Experience level
    #[serde(rename = "ExperienceLevel", skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,

    /// Client region
    #[serde(rename = "ClientRegion", skip_serializing_if = "Option::is_none")]
    pub client_region: Option<String>,

    /// Payment method
    #[serde(rename = "PaymentMethod", skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,

    /// Jobs completed
    #[serde(rename = "JobsCompleted", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub jobs_completed: Option<f64>,

    /// Hourly rate in USD
    #[serde(rename = "HourlyRate", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 10000.0))]
    pub hourly_rate: Option<f64>,

    /// Job success rate (0-100)
    #[serde(rename = "JobSuccessRate", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub job_success_rate: Option<f64>,

    /// Client rating (0-5)
    #[serde(rename = "ClientRating", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 5.0))]
    pub client_rating: Option<f64>,

    /// Average job duration in days
    #[serde(rename = "JobDurationDays", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub job_duration_days: Option<f64>,

    /// Project billing type
    #[serde(rename = "ProjectType", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,

    /// Rehire rate (0-100)
    #[serde(rename = "RehireRate", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0, max = 100.0))]
    pub rehire_rate: Option<f64>,

    /// Marketing spend in USD
    #[serde(rename = "MarketingSpend", skip_serializing_if = "Option::is_none")]
    #[validate(range(min = 0.0))]
    pub marketing_spend: Option<f64>,
}

/// Binary class label returned by the prediction stub
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PredictedClass {
    /// High earner
    Yes,
    /// Not a high earner
    No,
}

impl Default for PredictedClass {
    fn default() -> Self {
        Self::No
    }
}

impl std::fmt::Display for PredictedClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

/// Prediction stub output
///
/// The two probabilities always sum to 1. The displayed probability is a
/// mock value sampled independently of the class decision and must never be
/// treated as a calibrated confidence score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Model identifier that produced the prediction
    pub model_used: String,

    /// Predicted class label
    pub predicted_class: PredictedClass,

    /// Displayed probability of the positive class
    #[serde(rename = "probability_HighEarner_Yes")]
    pub probability_yes: f64,

    /// Complement of the positive probability
    #[serde(rename = "probability_HighEarner_No")]
    pub probability_no: f64,

    /// Error label attached by tolerant clients when substituting a fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Free-form note, used to flag synthetic fallback results
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Reshaped per-category average income row used by the bar chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobIncome {
    /// Job category label
    #[serde(rename = "JobCategory")]
    pub job_category: String,

    /// Average income for the category
    pub avg_income: f64,
}

/// Label/series structure consumed by the charting layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    /// Category labels
    pub labels: Vec<String>,

    /// One or more data series aligned with `labels`
    pub datasets: Vec<ChartDataset>,
}

/// One chart series
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartDataset {
    /// Series label
    pub label: String,

    /// Series values, one per chart label
    pub data: Vec<f64>,
}
