//! SQLite implementation of [`ClimateStore`].
//!
//! The dataset file is opened read-only through a small sqlx pool that is
//! created once at startup and shared by every request.

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

use super::{
    ClimateStore, DatasetSummary, PrecipitationReading, Station, TemperatureReading,
    TemperatureStats,
};
use crate::error::{Result, SurfsUpError};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// Read-only handle to a SQLite observation dataset
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open the dataset at `path` with at most `max_connections` readers.
    pub async fn open(path: &Path, max_connections: u32) -> Result<Self> {
        if !path.exists() {
            return Err(SurfsUpError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Dataset not found: {}", path.display()),
            )));
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .read_only(true)
            .create_if_missing(false);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await?;

        info!(
            file_path = %path.display(),
            max_connections = max_connections,
            "Opened dataset"
        );

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Full rows of the `station` table, ordered by identifier
    pub async fn station_details(&self) -> Result<Vec<Station>> {
        let stations = sqlx::query_as::<_, Station>(
            "SELECT station, name,
                    CAST(latitude AS REAL) AS latitude,
                    CAST(longitude AS REAL) AS longitude,
                    CAST(elevation AS REAL) AS elevation
             FROM station
             ORDER BY station",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(stations)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ClimateStore for SqliteStore {
    async fn latest_date(&self) -> Result<String> {
        let latest: Option<String> = sqlx::query_scalar("SELECT MAX(date) FROM measurement")
            .fetch_one(&self.pool)
            .await?;

        latest.ok_or_else(|| SurfsUpError::EmptyDataset {
            message: "no observations to take a latest date from".to_string(),
        })
    }

    async fn precipitation_since(&self, start: &str) -> Result<Vec<PrecipitationReading>> {
        let readings = sqlx::query_as::<_, PrecipitationReading>(
            "SELECT date, CAST(prcp AS REAL) AS prcp FROM measurement WHERE date >= ?",
        )
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        debug!(start = start, rows = readings.len(), "Fetched precipitation");
        Ok(readings)
    }

    async fn most_active_station(&self) -> Result<String> {
        let station: Option<String> = sqlx::query_scalar(
            "SELECT station FROM measurement
             GROUP BY station
             ORDER BY COUNT(*) DESC, station ASC
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;

        station.ok_or_else(|| SurfsUpError::EmptyDataset {
            message: "no observations to rank stations by".to_string(),
        })
    }

    async fn temperature_stats(&self, start: &str, end: Option<&str>) -> Result<TemperatureStats> {
        let query = match end {
            Some(end) => sqlx::query_as::<_, TemperatureStats>(
                "SELECT CAST(MIN(tobs) AS REAL) AS min,
                        CAST(AVG(tobs) AS REAL) AS avg,
                        CAST(MAX(tobs) AS REAL) AS max
                 FROM measurement
                 WHERE date >= ? AND date <= ?",
            )
            .bind(start)
            .bind(end),
            None => sqlx::query_as::<_, TemperatureStats>(
                "SELECT CAST(MIN(tobs) AS REAL) AS min,
                        CAST(AVG(tobs) AS REAL) AS avg,
                        CAST(MAX(tobs) AS REAL) AS max
                 FROM measurement
                 WHERE date >= ?",
            )
            .bind(start),
        };

        Ok(query.fetch_one(&self.pool).await?)
    }

    async fn temperature_observations(
        &self,
        station: &str,
        start: &str,
    ) -> Result<Vec<TemperatureReading>> {
        let readings = sqlx::query_as::<_, TemperatureReading>(
            "SELECT date, CAST(tobs AS REAL) AS tobs
             FROM measurement
             WHERE station = ? AND date >= ?
             ORDER BY date",
        )
        .bind(station)
        .bind(start)
        .fetch_all(&self.pool)
        .await?;

        debug!(
            station = station,
            start = start,
            rows = readings.len(),
            "Fetched temperature observations"
        );
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<String>> {
        let stations: Vec<String> =
            sqlx::query_scalar("SELECT DISTINCT station FROM station ORDER BY station")
                .fetch_all(&self.pool)
                .await?;

        Ok(stations)
    }

    async fn summary(&self) -> Result<DatasetSummary> {
        let (observation_count, first_date, latest_date): (i64, Option<String>, Option<String>) =
            sqlx::query_as("SELECT COUNT(*), MIN(date), MAX(date) FROM measurement")
                .fetch_one(&self.pool)
                .await?;

        let station_count: i64 = sqlx::query_scalar("SELECT COUNT(DISTINCT station) FROM station")
            .fetch_one(&self.pool)
            .await?;

        Ok(DatasetSummary {
            observation_count,
            station_count,
            first_date,
            latest_date,
        })
    }
}
