//! In-memory store and request helpers for handler tests.

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use tower::ServiceExt;

use crate::config::Config;
use crate::error::{Result, SurfsUpError};
use crate::router::build_router;
use crate::state::AppState;
use crate::store::{
    ClimateStore, DatasetSummary, Observation, PrecipitationReading, TemperatureReading,
    TemperatureStats,
};

/// A [`ClimateStore`] over plain vectors, optionally failing every call
#[derive(Debug, Default)]
pub struct FakeStore {
    pub observations: Vec<Observation>,
    pub stations: Vec<String>,
    pub unavailable: bool,
}

impl FakeStore {
    pub fn new(observations: Vec<Observation>, stations: &[&str]) -> Self {
        Self {
            observations,
            stations: stations.iter().map(|s| s.to_string()).collect(),
            unavailable: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self) -> Result<()> {
        if self.unavailable {
            return Err(SurfsUpError::Storage(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn obs(station: &str, date: &str, prcp: Option<f64>, tobs: f64) -> Observation {
    Observation {
        station: station.to_string(),
        date: date.to_string(),
        prcp,
        tobs: Some(tobs),
    }
}

#[async_trait]
impl ClimateStore for FakeStore {
    async fn latest_date(&self) -> Result<String> {
        self.check()?;
        self.observations
            .iter()
            .map(|o| o.date.clone())
            .max()
            .ok_or_else(|| SurfsUpError::EmptyDataset {
                message: "no observations".to_string(),
            })
    }

    async fn precipitation_since(&self, start: &str) -> Result<Vec<PrecipitationReading>> {
        self.check()?;
        Ok(self
            .observations
            .iter()
            .filter(|o| o.date.as_str() >= start)
            .map(|o| PrecipitationReading {
                date: o.date.clone(),
                prcp: o.prcp,
            })
            .collect())
    }

    async fn most_active_station(&self) -> Result<String> {
        self.check()?;
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for o in &self.observations {
            *counts.entry(o.station.as_str()).or_default() += 1;
        }
        // max_by_key keeps the last maximum, so walk in reverse to prefer the smallest id
        counts
            .into_iter()
            .rev()
            .max_by_key(|(_, count)| *count)
            .map(|(station, _)| station.to_string())
            .ok_or_else(|| SurfsUpError::EmptyDataset {
                message: "no observations".to_string(),
            })
    }

    async fn temperature_stats(&self, start: &str, end: Option<&str>) -> Result<TemperatureStats> {
        self.check()?;
        let temps: Vec<f64> = self
            .observations
            .iter()
            .filter(|o| o.date.as_str() >= start && end.map_or(true, |e| o.date.as_str() <= e))
            .filter_map(|o| o.tobs)
            .collect();

        if temps.is_empty() {
            return Ok(TemperatureStats::default());
        }
        Ok(TemperatureStats {
            min: temps.iter().copied().reduce(f64::min),
            avg: Some(temps.iter().sum::<f64>() / temps.len() as f64),
            max: temps.iter().copied().reduce(f64::max),
        })
    }

    async fn temperature_observations(
        &self,
        station: &str,
        start: &str,
    ) -> Result<Vec<TemperatureReading>> {
        self.check()?;
        let mut readings: Vec<TemperatureReading> = self
            .observations
            .iter()
            .filter(|o| o.station == station && o.date.as_str() >= start)
            .map(|o| TemperatureReading {
                date: o.date.clone(),
                tobs: o.tobs,
            })
            .collect();
        readings.sort_by(|a, b| a.date.cmp(&b.date));
        Ok(readings)
    }

    async fn stations(&self) -> Result<Vec<String>> {
        self.check()?;
        let distinct: BTreeSet<&String> = self.stations.iter().collect();
        Ok(distinct.into_iter().cloned().collect())
    }

    async fn summary(&self) -> Result<DatasetSummary> {
        self.check()?;
        Ok(DatasetSummary {
            observation_count: self.observations.len() as i64,
            station_count: self.stations.iter().collect::<BTreeSet<_>>().len() as i64,
            first_date: self.observations.iter().map(|o| o.date.clone()).min(),
            latest_date: self.observations.iter().map(|o| o.date.clone()).max(),
        })
    }
}

/// Build state around a fake store with default configuration
pub fn test_state(store: FakeStore) -> Arc<AppState> {
    AppState::new_shared(Config::default(), Arc::new(store))
}

/// Send a GET through the full router and return status and body text
pub async fn get(state: Arc<AppState>, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    let response = build_router(state)
        .oneshot(request)
        .await
        .expect("router should not fail");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}

/// Like [`get`], parsing the body as JSON
pub async fn get_json(state: Arc<AppState>, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(state, uri).await;
    let json = serde_json::from_str(&body).expect("response should be JSON");
    (status, json)
}
