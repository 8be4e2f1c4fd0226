//! Freelance Insights API server library

#![forbid(unsafe_code)]

pub mod dataset;
pub mod handlers;
pub mod routes;
pub mod state;

pub use state::AppState;

use axum::Router;
use axum::http::HeaderValue;
use freelance_core::Config;
use freelance_model::HighEarnerClassifier;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// Build the API router with the live heuristic classifier
#[must_use]
pub fn build_router(config: Config) -> Router {
    finish_router(Arc::new(AppState::new(config)))
}

/// Build the API router with an explicit classifier implementation
///
/// Integration tests substitute a deterministic classifier here so that the
/// probabilistic predict assertions become exact.
#[must_use]
pub fn build_router_with_classifier(
    config: Config,
    classifier: Arc<dyn HighEarnerClassifier>,
) -> Router {
    finish_router(Arc::new(AppState::with_classifier(config, classifier)))
}

fn finish_router(state: Arc<AppState>) -> Router {
    let cors = state
        .config
        .api
        .enable_cors
        .then(|| cors_layer(&state.config.api.cors_origins));

    let mut app = routes::build_router().with_state(state);
    if let Some(cors) = cors {
        app = app.layer(cors);
    }
    app
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|origin| origin == "*") {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
