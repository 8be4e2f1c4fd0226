//! API route definitions

use crate::{handlers, state::AppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;

/// Build the data and prediction routes
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // Legacy scalar summary and record listing
        .route("/summary", get(handlers::records::summary))
        .route("/clean_data", get(handlers::records::list_records))
        // Visualization data endpoints
        .route(
            "/data/earnings_distribution",
            get(handlers::distribution::earnings_distribution),
        )
        .route(
            "/data/earnings_by_job_category",
            get(handlers::categories::earnings_by_job_category),
        )
        .route(
            "/data/job_category_distribution",
            get(handlers::categories::job_category_distribution),
        )
        .route(
            "/data/experience_level_distribution",
            get(handlers::categories::experience_level_distribution),
        )
        .route(
            "/data/jobs_completed_vs_earnings",
            get(handlers::scatter::jobs_vs_earnings),
        )
        .route(
            "/data/model_comparison",
            get(handlers::models::model_comparison),
        )
        // Model metadata
        .route("/model_info/:model_type", get(handlers::models::model_info))
        // Prediction stubs; the GET form serves query-string fallback clients
        .route(
            "/predict_high_earner",
            post(handlers::predict::predict_random_forest)
                .get(handlers::predict::predict_random_forest_query),
        )
        .route(
            "/predict_high_earner_logistic",
            post(handlers::predict::predict_logistic),
        )
        .route(
            "/predict_high_earner_tree",
            post(handlers::predict::predict_tree),
        )
        .layer(CompressionLayer::new())
}

/// Build health check routes
pub fn health_routes() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Combine all routes into a single router
pub fn build_router() -> Router<Arc<AppState>> {
    Router::new()
        .merge(api_routes())
        .merge(health_routes())
        .route("/", get(root_endpoint))
        .fallback(not_found_handler)
}

/// Handle 404 Not Found errors
async fn not_found_handler() -> (axum::http::StatusCode, axum::Json<serde_json::Value>) {
    (
        axum::http::StatusCode::NOT_FOUND,
        axum::Json(serde_json::json!({
            "error": "Not Found",
            "code": "ROUTE_NOT_FOUND",
            "message": "The requested endpoint does not exist"
        })),
    )
}

/// Root endpoint: service banner plus an endpoint index for diagnostics
async fn root_endpoint() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({
        "service": "Freelance Insights API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "ok",
        "endpoints": {
            "health": "/health",
            "summary": "/summary",
            "clean_data": "/clean_data",
            "earnings_distribution": "/data/earnings_distribution",
            "earnings_by_job_category": "/data/earnings_by_job_category",
            "job_category_distribution": "/data/job_category_distribution",
            "experience_level_distribution": "/data/experience_level_distribution",
            "jobs_completed_vs_earnings": "/data/jobs_completed_vs_earnings",
            "model_comparison": "/data/model_comparison",
            "model_info": "/model_info/:model_type",
            "predict": "/predict_high_earner"
        }
    }))
}
