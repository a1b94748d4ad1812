//! Temperature observation endpoint handler.
//!
//! Returns the last 365 days of temperature readings for the station with the
//! most observations, one entry per row.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::TemperatureReading;
use crate::window::window_start;

const ENDPOINT: &str = "/api/v1.0/tobs";

async fn most_active_station_readings(state: &AppState) -> Result<(String, Vec<TemperatureReading>)> {
    let latest = state.store.latest_date().await?;
    let start = window_start(&latest)?;
    let station = state.store.most_active_station().await?;

    debug!(station = %station, window_start = %start, "Using most active station");

    let readings = state
        .store
        .temperature_observations(&station, &start)
        .await?;
    Ok((station, readings))
}

/// Handle GET /api/v1.0/tobs requests
pub async fn tobs_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing tobs request");

    match most_active_station_readings(&state).await {
        Ok((station, readings)) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                station = %station,
                rows = readings.len(),
                "Tobs request successful"
            );
            Json(readings).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
