//! HTTP request handlers for the surfsup API.
//!
//! Every handler turns one request into calls on the shared
//! [`ClimateStore`](crate::store::ClimateStore) and serializes the result.

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::error::SurfsUpError;
use crate::logging::log_request_error;

pub mod heartbeat;
pub mod index;
pub mod precipitation;
pub mod stations;
pub mod temperature;
pub mod tobs;

pub use heartbeat::heartbeat_handler;
pub use index::index_handler;
pub use precipitation::precipitation_handler;
pub use stations::stations_handler;
pub use temperature::{start_end_handler, start_handler};
pub use tobs::tobs_handler;

#[cfg(test)]
pub(crate) mod test_support;

/// Log a failed request and build its response.
///
/// Client errors echo the reason; server errors only say that something went
/// wrong, the detail stays in the log under the same request id.
pub(crate) fn error_response(
    error: SurfsUpError,
    endpoint: &str,
    request_id: &str,
    params: Option<&str>,
) -> Response {
    log_request_error(&error, endpoint, request_id, params);

    let status = error.status_code();
    let message = if status.is_client_error() {
        error.to_string()
    } else {
        "Internal server error".to_string()
    };

    (
        status,
        Json(serde_json::json!({
            "error": message,
            "request_id": request_id
        })),
    )
        .into_response()
}
