use anyhow::{Context, Result};
use std::path::PathBuf;

use surfsup::store::ClimateStore;
use surfsup::window::window_start;
use surfsup::SqliteStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Path to the dataset, defaulting to the bundled Hawaii file
    let file_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting dataset: {}", file_path.display());

    let store = SqliteStore::open(&file_path, 1)
        .await
        .with_context(|| format!("failed to open {}", file_path.display()))?;

    let summary = store.summary().await?;

    println!("\n=== MEASUREMENTS ===");
    println!("  rows        = {}", summary.observation_count);
    println!(
        "  first date  = {}",
        summary.first_date.as_deref().unwrap_or("-")
    );
    println!(
        "  latest date = {}",
        summary.latest_date.as_deref().unwrap_or("-")
    );

    println!("\n=== STATIONS ({}) ===", summary.station_count);
    for station in store.station_details().await? {
        print!("  {}", station.station);
        if let Some(name) = &station.name {
            print!("  {}", name);
        }
        if let (Some(lat), Some(lon)) = (station.latitude, station.longitude) {
            print!("  ({:.4}, {:.4})", lat, lon);
        }
        if let Some(elevation) = station.elevation {
            print!("  {:.1} m", elevation);
        }
        println!();
    }

    if let Some(latest) = &summary.latest_date {
        let start = window_start(latest)?;
        let station = store.most_active_station().await?;
        let readings = store.temperature_observations(&station, &start).await?;

        println!("\n=== LAST 365 DAYS ===");
        println!("  window start        = {}", start);
        println!("  most active station = {}", station);
        println!("  temperature rows    = {}", readings.len());
    }

    store.close().await;
    Ok(())
}
