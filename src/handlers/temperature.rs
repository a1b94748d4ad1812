//! Temperature summary endpoint handlers.
//!
//! `/api/v1.0/{start}` and `/api/v1.0/{start}/{end}` return the minimum,
//! average and maximum observed temperature over an inclusive date range.
//! When nothing matches, the three values are `null`.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::window::validate_date;

/// Response body for the temperature summary endpoints
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemperatureSummary {
    #[serde(rename = "Start Date")]
    pub start_date: String,
    #[serde(rename = "End Date", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "Min Temp")]
    pub min_temp: Option<f64>,
    #[serde(rename = "Avg Temp")]
    pub avg_temp: Option<f64>,
    #[serde(rename = "Max Temp")]
    pub max_temp: Option<f64>,
}

async fn summarize(state: &AppState, start: String, end: Option<String>) -> Result<TemperatureSummary> {
    if state.config.data.strict_dates {
        validate_date("start", &start)?;
        if let Some(end) = &end {
            validate_date("end", end)?;
        }
    }

    let stats = state
        .store
        .temperature_stats(&start, end.as_deref())
        .await?;

    Ok(TemperatureSummary {
        start_date: start,
        end_date: end,
        min_temp: stats.min,
        avg_temp: stats.avg,
        max_temp: stats.max,
    })
}

async fn respond(
    state: &AppState,
    endpoint: &str,
    start: String,
    end: Option<String>,
) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();
    let params = match &end {
        Some(end) => format!("start={start}, end={end}"),
        None => format!("start={start}"),
    };

    debug!(
        endpoint = endpoint,
        request_id = %request_id,
        params = %params,
        "Processing temperature summary request"
    );

    match summarize(state, start, end).await {
        Ok(summary) => {
            info!(
                endpoint = endpoint,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                matched = summary.min_temp.is_some(),
                "Temperature summary request successful"
            );
            Json(summary).into_response()
        }
        Err(error) => error_response(error, endpoint, &request_id, Some(&params)),
    }
}

/// Handle GET /api/v1.0/{start} requests
pub async fn start_handler(
    State(state): State<Arc<AppState>>,
    Path(start): Path<String>,
) -> Response {
    respond(&state, "/api/v1.0/{start}", start, None).await
}

/// Handle GET /api/v1.0/{start}/{end} requests
pub async fn start_end_handler(
    State(state): State<Arc<AppState>>,
    Path((start, end)): Path<(String, String)>,
) -> Response {
    respond(&state, "/api/v1.0/{start}/{end}", start, Some(end)).await
}
