//! Health check endpoint for monitoring and connectivity probes

use axum::response::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Human readable status message
    pub message: String,
    /// Service version
    pub version: String,
    /// Timestamp of the check
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Process uptime in seconds
    pub uptime_seconds: u64,
}

/// Liveness probe
///
/// The provider has no external dependencies to check, so this always
/// reports healthy; callers use it as a pure availability signal. The
/// `status`/`message` pair keeps the legacy wire contract.
pub async fn health_check() -> Json<HealthResponse> {
    debug!("health check");
    Json(HealthResponse {
        status: "OK".to_string(),
        message: "API is running smoothly!".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
        uptime_seconds: get_uptime_seconds(),
    })
}

/// Get process uptime in seconds
fn get_uptime_seconds() -> u64 {
    static START_TIME: std::sync::LazyLock<std::time::Instant> =
        std::sync::LazyLock::new(std::time::Instant::now);
    START_TIME.elapsed().as_secs()
}
