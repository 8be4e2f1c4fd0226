//! Integration tests for the API surface
//!
//! These drive the full router through tower's `oneshot` with the
//! deterministic classifier substituted, so the predict assertions are
//! exact rather than probabilistic.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use freelance_api::build_router_with_classifier;
use freelance_core::Config;
use freelance_model::ScriptedClassifier;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn test_config() -> Config {
    let mut config = Config::default();
    config.dataset.size = 60;
    config.dataset.seed = Some(1234);
    config
}

fn app() -> Router {
    build_router_with_classifier(test_config(), Arc::new(ScriptedClassifier::new()))
}

async fn get_json(app: &Router, path: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(path)
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn post_json(app: &Router, path: &str, body: &Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = app();
    let (status, body) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("OK"));
    assert_eq!(body["message"], json!("API is running smoothly!"));
}

#[tokio::test]
async fn test_root_endpoint_lists_endpoints() {
    let app = app();
    let (status, body) = get_json(&app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["endpoints"]["predict"].is_string());
    assert!(body["endpoints"]["earnings_distribution"].is_string());
}

#[tokio::test]
async fn test_summary_is_array_wrapped_and_ordered() {
    let app = app();
    let (status, body) = get_json(&app, "/summary").await;

    assert_eq!(status, StatusCode::OK);
    let entries = body.as_array().expect("array-wrapped summary");
    assert_eq!(entries.len(), 1);

    let summary = &entries[0];
    let min = summary["min_income"].as_f64().expect("min_income");
    let median = summary["median_income"].as_f64().expect("median_income");
    let max = summary["max_income"].as_f64().expect("max_income");
    assert!(min <= median && median <= max);
}

#[tokio::test]
async fn test_clean_data_returns_full_dataset() {
    let app = app();
    let (status, body) = get_json(&app, "/clean_data").await;

    assert_eq!(status, StatusCode::OK);
    let records = body.as_array().expect("record array");
    assert_eq!(records.len(), 60);
    assert!(records[0]["FreelancerID"].is_string());
    assert!(records[0]["EarningsUSD"].is_number());
}

#[tokio::test]
async fn test_earnings_distribution_twice_is_well_formed() {
    let app = app();

    for _ in 0..2 {
        let (status, body) = get_json(&app, "/data/earnings_distribution").await;
        assert_eq!(status, StatusCode::OK);

        let stats = &body["statistics"];
        for key in ["mean", "median", "min", "max", "sd", "q1", "q3"] {
            assert!(stats[key].is_number(), "statistics.{key} missing");
        }
        let min = stats["min"].as_f64().expect("min");
        let median = stats["median"].as_f64().expect("median");
        let max = stats["max"].as_f64().expect("max");
        assert!(min <= median && median <= max);

        let boxplot = &body["boxplot"];
        let q1 = boxplot["q1"].as_f64().expect("q1");
        let q3 = boxplot["q3"].as_f64().expect("q3");
        assert!(q1 <= q3);

        let histogram = body["histogram"].as_array().expect("histogram");
        assert!(!histogram.is_empty());
        let total: u64 = histogram
            .iter()
            .map(|bin| bin["y"].as_u64().expect("bin count"))
            .sum();
        assert_eq!(total, 60);
    }
}

#[tokio::test]
async fn test_earnings_by_job_category_aggregates() {
    let app = app();
    let (status, body) = get_json(&app, "/data/earnings_by_job_category").await;

    assert_eq!(status, StatusCode::OK);
    let categories = body.as_array().expect("category array");
    assert!(!categories.is_empty());

    let mut total = 0;
    for entry in categories {
        assert!(entry["JobCategory"].is_string());
        let min = entry["min"].as_f64().expect("min");
        let median = entry["median"].as_f64().expect("median");
        let max = entry["max"].as_f64().expect("max");
        assert!(min <= median && median <= max);
        total += entry["count"].as_u64().expect("count");
    }
    assert_eq!(total, 60);
}

#[tokio::test]
async fn test_job_category_distribution_percentages() {
    let app = app();
    let (status, body) = get_json(&app, "/data/job_category_distribution").await;

    assert_eq!(status, StatusCode::OK);
    let shares = body.as_array().expect("share array");
    let sum: f64 = shares
        .iter()
        .map(|s| s["percentage"].as_f64().expect("percentage"))
        .sum();
    assert!((sum - 100.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_experience_level_distribution() {
    let app = app();
    let (status, body) = get_json(&app, "/data/experience_level_distribution").await;

    assert_eq!(status, StatusCode::OK);
    let levels = body.as_array().expect("level array");
    assert!(!levels.is_empty());

    let mut total = 0;
    for entry in levels {
        assert!(entry["ExperienceLevel"].is_string());
        let count = entry["count"].as_u64().expect("count");
        let high = entry["high_earner_count"].as_u64().expect("high count");
        let pct = entry["high_earner_percentage"].as_f64().expect("pct");
        assert!(high <= count);
        assert!((0.0..=100.0).contains(&pct));
        total += count;
    }
    assert_eq!(total, 60);
}

#[tokio::test]
async fn test_jobs_vs_earnings_regression() {
    let app = app();
    let (status, body) = get_json(&app, "/data/jobs_completed_vs_earnings").await;

    assert_eq!(status, StatusCode::OK);
    let scatter = body["scatter_data"].as_array().expect("scatter points");
    assert_eq!(scatter.len(), 60);

    let correlation = body["correlation"].as_f64().expect("correlation");
    assert!((-1.0..=1.0).contains(&correlation));
    // Earnings are synthesized from jobs volume, so the relationship is positive
    assert!(correlation > 0.0);

    let r_squared = body["regression"]["r_squared"].as_f64().expect("r_squared");
    assert!((0.0..=1.0).contains(&r_squared));
    assert!(body["regression"]["slope"].as_f64().expect("slope") > 0.0);
}

#[tokio::test]
async fn test_model_comparison_payload() {
    let app = app();
    let (status, body) = get_json(&app, "/data/model_comparison").await;

    assert_eq!(status, StatusCode::OK);
    let performance = body["performance"].as_array().expect("performance rows");
    assert_eq!(performance.len(), 3);
    for row in performance {
        for key in ["accuracy", "sensitivity", "specificity", "precision", "f1_score", "auc"] {
            assert!(row[key].is_number(), "performance.{key} missing");
        }
    }
    for model in ["logistic", "tree", "rf"] {
        assert!(body["roc_curves"][model].is_array());
        assert!(body["auc_values"][model].is_number());
    }
}

#[tokio::test]
async fn test_model_info_known_and_unknown() {
    let app = app();

    let (status, body) = get_json(&app, "/model_info/rf").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_name"], json!("Random Forest"));

    let (status, body) = get_json(&app, "/model_info/unknown_type").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["model_name"], json!("Decision Tree"));
    assert_eq!(body["model_type"], json!("unknown_type"));
}

#[tokio::test]
async fn test_predict_accepts_every_body_encoding() {
    let app = app();
    let features = json!({"ExperienceLevel": "Expert", "HourlyRate": 80.0});
    let encodings = [
        features.clone(),
        json!([features.clone()]),
        json!({"data": features.clone()}),
        json!({"data": features.to_string()}),
    ];

    for body in &encodings {
        let (status, response) = post_json(&app, "/predict_high_earner", body).await;
        assert_eq!(status, StatusCode::OK, "encoding rejected: {body}");
        assert_eq!(response["predicted_class"], json!("Yes"));
        assert_eq!(response["model_used"], json!("rf"));

        let yes = response["probability_HighEarner_Yes"]
            .as_f64()
            .expect("probability");
        let no = response["probability_HighEarner_No"]
            .as_f64()
            .expect("complement");
        assert!((0.70..0.95).contains(&yes));
        assert!((yes + no - 1.0).abs() < 1e-9);
    }
}

#[tokio::test]
async fn test_predict_query_string_fallback() {
    let app = app();
    let (status, response) =
        get_json(&app, "/predict_high_earner?ExperienceLevel=Expert&HourlyRate=80").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["predicted_class"], json!("Yes"));
    let yes = response["probability_HighEarner_Yes"]
        .as_f64()
        .expect("probability");
    assert!((0.70..0.95).contains(&yes));
}

#[tokio::test]
async fn test_predict_model_specific_routes() {
    let app = app();
    let features = json!({"ExperienceLevel": "Intermediate", "HourlyRate": 30.0});

    let (status, response) = post_json(&app, "/predict_high_earner_logistic", &features).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["model_used"], json!("logistic"));
    // Moderate band midpoint from the scripted classifier
    assert_eq!(response["probability_HighEarner_Yes"], json!(0.55));

    let (status, response) = post_json(&app, "/predict_high_earner_tree", &features).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(response["model_used"], json!("tree"));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let app = app();
    let (status, body) = get_json(&app, "/data/does_not_exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], json!("ROUTE_NOT_FOUND"));
}
