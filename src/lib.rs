//! # surfsup
//!
//! A read-only HTTP API over a historical weather observation dataset.
//!
//! The dataset is a SQLite file with a `measurement` table (one row per
//! station per day, with precipitation and temperature) and a `station`
//! table. The server answers a fixed set of questions about it: daily
//! precipitation over the last year of data, the list of stations, the last
//! year of temperatures at the busiest station, and min/avg/max temperature
//! over a date range.
//!
//! ## Architecture
//!
//! - **Data Layer**: [`store::ClimateStore`], implemented over sqlx by
//!   [`store::SqliteStore`]
//! - **API Layer**: axum handlers in [`handlers`], wired up by
//!   [`router::build_router`]
//! - **State**: one [`AppState`] built at startup and shared by reference

pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod router;
pub mod state;
pub mod store;
pub mod window;

pub use config::Config;
pub use error::{Result, SurfsUpError};
pub use logging::{create_http_trace_layer, generate_request_id, init_tracing, log_dataset_stats};
pub use router::build_router;
pub use state::AppState;
pub use store::{ClimateStore, SqliteStore};
