//! Index endpoint handler.
//!
//! Lists the available API routes as a small HTML page.

use axum::response::Html;

/// Routes advertised on the index page, in display order
pub const API_ROUTES: [&str; 5] = [
    "/api/v1.0/precipitation",
    "/api/v1.0/stations",
    "/api/v1.0/tobs",
    "/api/v1.0/&lt;start&gt;",
    "/api/v1.0/&lt;start&gt;/&lt;end&gt;",
];

/// Handle GET / requests
pub async fn index_handler() -> Html<String> {
    Html(format!("Available Routes:<br/>{}", API_ROUTES.join("<br/>")))
}
