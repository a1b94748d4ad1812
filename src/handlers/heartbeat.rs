//! Heartbeat endpoint handler.
//!
//! Returns server status information, including uptime and a summary of the
//! dataset being served.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use uuid::Uuid;

use super::error_response;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::DatasetSummary;

/// Unique per process
static SERVER_ID: once_cell::sync::Lazy<String> =
    once_cell::sync::Lazy::new(|| Uuid::new_v4().to_string());

/// Server start time
static START_TIME: once_cell::sync::Lazy<SystemTime> =
    once_cell::sync::Lazy::new(SystemTime::now);

/// Heartbeat response structure
#[derive(Serialize)]
pub struct HeartbeatResponse {
    /// Server ID (unique per instance)
    pub server_id: String,
    /// Current timestamp (ISO 8601 format)
    pub timestamp: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Dataset information
    pub dataset: DatasetInfo,
    /// Server status
    pub status: String,
}

/// Dataset information structure
#[derive(Serialize)]
pub struct DatasetInfo {
    /// Dataset file path
    pub file_path: String,
    #[serde(flatten)]
    pub summary: DatasetSummary,
}

/// Mark the server start time; called once from `main` before serving.
pub fn mark_started() {
    once_cell::sync::Lazy::force(&START_TIME);
    once_cell::sync::Lazy::force(&SERVER_ID);
}

/// Handle GET /heartbeat requests
pub async fn heartbeat_handler(State(state): State<Arc<AppState>>) -> Response {
    let now = SystemTime::now();
    let timestamp = chrono::DateTime::<chrono::Utc>::from(now)
        .to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
    let uptime = now
        .duration_since(*START_TIME)
        .unwrap_or(Duration::from_secs(0));

    let summary = match state.store.summary().await {
        Ok(summary) => summary,
        Err(error) => {
            return error_response(error, "/heartbeat", &generate_request_id(), None);
        }
    };

    let response = HeartbeatResponse {
        server_id: SERVER_ID.clone(),
        timestamp,
        uptime_seconds: uptime.as_secs(),
        dataset: DatasetInfo {
            file_path: state.config.data.file_path.display().to_string(),
            summary,
        },
        status: "healthy".to_string(),
    };

    Json(response).into_response()
}
