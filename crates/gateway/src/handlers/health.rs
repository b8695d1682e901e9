//! Health check handlers

use crate::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use trizhub_common::store::StoreStats;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: String,
    pub checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    pub store: CheckResult,
}

#[derive(Serialize)]
pub struct CheckResult {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ms: Option<u64>,
    pub records: StoreStats,
}

/// Liveness probe - always returns healthy if server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: "TrizHub API is running".to_string(),
    })
}

/// Readiness probe - checks the store
pub async fn ready(State(state): State<AppState>) -> Json<ReadyResponse> {
    let start = std::time::Instant::now();

    let stats = state.repo.stats().await;
    let store_check = CheckResult {
        status: "up".to_string(),
        latency_ms: Some(start.elapsed().as_millis() as u64),
        records: stats,
    };

    Json(ReadyResponse {
        status: "ready".to_string(),
        checks: HealthChecks { store: store_check },
    })
}
