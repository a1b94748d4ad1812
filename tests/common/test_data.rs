//! Test data generation utilities.
//!
//! This module writes small SQLite datasets shaped like `hawaii.sqlite` with
//! known contents for testing the surfsup server.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool};
use std::path::Path;

type Result<T> = std::result::Result<T, sqlx::Error>;

/// Latest date in [`MEASUREMENTS`]
pub const LATEST_DATE: &str = "2017-08-23";

/// First date of the 365-day window ending at [`LATEST_DATE`]
pub const WINDOW_START: &str = "2016-08-23";

/// Station with the most rows in [`MEASUREMENTS`]
pub const MOST_ACTIVE_STATION: &str = "USC00519281";

/// `(station, date, prcp, tobs)` rows of the `measurement` table
pub const MEASUREMENTS: &[(&str, &str, Option<f64>, f64)] = &[
    ("USC00519281", "2016-08-20", Some(1.2), 75.0),
    ("USC00519281", "2016-08-23", Some(0.7), 77.0),
    ("USC00519281", "2017-08-18", Some(0.06), 79.0),
    ("USC00519281", "2017-08-19", Some(0.0), 76.0),
    ("USC00519281", "2017-08-20", None, 80.0),
    ("USC00519281", "2017-08-21", Some(0.02), 79.0),
    ("USC00519281", "2017-08-22", Some(0.5), 76.0),
    ("USC00519281", "2017-08-23", Some(0.45), 76.0),
    ("USC00519397", "2017-08-20", Some(0.5), 81.0),
    ("USC00519397", "2017-08-21", Some(0.0), 81.0),
    ("USC00519397", "2017-08-23", Some(0.0), 81.0),
    ("USC00513117", "2017-08-20", None, 82.0),
];

/// `(station, name, latitude, longitude, elevation)` rows of the `station` table
pub const STATIONS: &[(&str, &str, f64, f64, f64)] = &[
    ("USC00519397", "WAIKIKI 717.2, HI US", 21.2716, -157.8168, 3.0),
    ("USC00513117", "KANEOHE 838.1, HI US", 21.4234, -157.8015, 14.6),
    ("USC00517948", "PEARL CITY, HI US", 21.3934, -157.9751, 11.9),
    ("USC00519281", "WAIHEE 837.5, HI US", 21.45167, -157.84889, 32.9),
];

async fn create_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE measurement (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            date TEXT,
            prcp FLOAT,
            tobs FLOAT
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "CREATE TABLE station (
            id INTEGER NOT NULL PRIMARY KEY,
            station TEXT,
            name TEXT,
            latitude FLOAT,
            longitude FLOAT,
            elevation FLOAT
        )",
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn open_for_writing(path: &Path) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);
    SqlitePool::connect_with(options).await
}

/// Creates a dataset file holding [`MEASUREMENTS`] and [`STATIONS`].
pub async fn create_test_hawaii_db(path: &Path) -> Result<()> {
    let pool = open_for_writing(path).await?;
    create_schema(&pool).await?;

    let mut tx = pool.begin().await?;
    for (station, date, prcp, tobs) in MEASUREMENTS {
        sqlx::query("INSERT INTO measurement (station, date, prcp, tobs) VALUES (?, ?, ?, ?)")
            .bind(*station)
            .bind(*date)
            .bind(*prcp)
            .bind(*tobs)
            .execute(&mut *tx)
            .await?;
    }
    for (station, name, latitude, longitude, elevation) in STATIONS {
        sqlx::query(
            "INSERT INTO station (station, name, latitude, longitude, elevation)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(*station)
        .bind(*name)
        .bind(*latitude)
        .bind(*longitude)
        .bind(*elevation)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    pool.close().await;
    Ok(())
}

/// Creates a dataset file with both tables but no rows.
pub async fn create_empty_db(path: &Path) -> Result<()> {
    let pool = open_for_writing(path).await?;
    create_schema(&pool).await?;
    pool.close().await;
    Ok(())
}
