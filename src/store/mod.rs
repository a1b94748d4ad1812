//! Read-only access to the station observation dataset.
//!
//! The dataset has two tables, `measurement` (one row per station per day)
//! and `station`. Their shape is declared here rather than discovered at
//! runtime; [`ClimateStore`] is the seam the HTTP handlers depend on, and
//! [`SqliteStore`] is the production implementation.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub mod sqlite;

pub use sqlite::SqliteStore;

/// A row of the `measurement` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Observation {
    pub station: String,
    /// ISO 8601 calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Precipitation; absent readings are stored as NULL
    pub prcp: Option<f64>,
    /// Observed temperature
    pub tobs: Option<f64>,
}

/// A row of the `station` table
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Station {
    pub station: String,
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub elevation: Option<f64>,
}

/// One `(date, prcp)` pair from a precipitation query
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct PrecipitationReading {
    pub date: String,
    pub prcp: Option<f64>,
}

/// One `(date, tobs)` pair for a single station
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct TemperatureReading {
    pub date: String,
    pub tobs: Option<f64>,
}

/// Aggregate temperature over a date range; all fields are `None` when no
/// observation matched.
#[derive(Debug, Clone, Copy, Default, PartialEq, sqlx::FromRow)]
pub struct TemperatureStats {
    pub min: Option<f64>,
    pub avg: Option<f64>,
    pub max: Option<f64>,
}

/// Row counts and date bounds of the whole dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DatasetSummary {
    pub observation_count: i64,
    pub station_count: i64,
    pub first_date: Option<String>,
    pub latest_date: Option<String>,
}

/// Read operations over the observation dataset.
///
/// Date bounds are compared as strings, which matches chronological order for
/// `YYYY-MM-DD` values.
#[async_trait]
pub trait ClimateStore: Send + Sync {
    /// Greatest `date` in `measurement`; fails with `EmptyDataset` when the
    /// table has no rows.
    async fn latest_date(&self) -> Result<String>;

    /// Every `(date, prcp)` with `date >= start`, in no particular order.
    async fn precipitation_since(&self, start: &str) -> Result<Vec<PrecipitationReading>>;

    /// Station with the most observation rows. Ties go to the smallest
    /// identifier. Fails with `EmptyDataset` when there are no observations.
    async fn most_active_station(&self) -> Result<String>;

    /// Min/avg/max of `tobs` for `start <= date` and, when given, `date <= end`.
    async fn temperature_stats(&self, start: &str, end: Option<&str>) -> Result<TemperatureStats>;

    /// `(date, tobs)` rows of one station with `date >= start`, oldest first.
    async fn temperature_observations(
        &self,
        station: &str,
        start: &str,
    ) -> Result<Vec<TemperatureReading>>;

    /// Distinct station identifiers from the `station` table, sorted.
    async fn stations(&self) -> Result<Vec<String>>;

    async fn summary(&self) -> Result<DatasetSummary>;
}
