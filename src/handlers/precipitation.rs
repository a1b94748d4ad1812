//! Precipitation endpoint handler.
//!
//! Returns total precipitation per day over the 365 days ending at the latest
//! observation in the dataset.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use super::error_response;
use crate::error::Result;
use crate::logging::generate_request_id;
use crate::state::AppState;
use crate::store::PrecipitationReading;
use crate::window::window_start;

const ENDPOINT: &str = "/api/v1.0/precipitation";

/// Sum readings per date, counting missing precipitation as zero.
///
/// Several stations report on the same day, so a date usually appears more
/// than once in the input.
pub fn merge_precipitation(
    readings: impl IntoIterator<Item = PrecipitationReading>,
) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for reading in readings {
        *totals.entry(reading.date).or_insert(0.0) += reading.prcp.unwrap_or(0.0);
    }
    totals
}

async fn last_year_precipitation(state: &AppState) -> Result<BTreeMap<String, f64>> {
    let latest = state.store.latest_date().await?;
    let start = window_start(&latest)?;

    debug!(latest_date = %latest, window_start = %start, "Resolved precipitation window");

    let readings = state.store.precipitation_since(&start).await?;
    Ok(merge_precipitation(readings))
}

/// Handle GET /api/v1.0/precipitation requests
pub async fn precipitation_handler(State(state): State<Arc<AppState>>) -> Response {
    let request_id = generate_request_id();
    let start_time = Instant::now();

    debug!(endpoint = ENDPOINT, request_id = %request_id, "Processing precipitation request");

    match last_year_precipitation(&state).await {
        Ok(totals) => {
            info!(
                endpoint = ENDPOINT,
                request_id = %request_id,
                duration_us = start_time.elapsed().as_micros() as u64,
                days = totals.len(),
                "Precipitation request successful"
            );
            Json(totals).into_response()
        }
        Err(error) => error_response(error, ENDPOINT, &request_id, None),
    }
}
