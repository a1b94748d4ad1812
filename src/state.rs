//! Application state management for surfsup.
//!
//! This module defines the shared state that is passed to all handlers: the
//! configuration and the read-only dataset handle, built once at startup.

use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::store::{ClimateStore, DatasetSummary};
use crate::window::window_start;

/// The main application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Configuration
    pub config: Config,
    /// Dataset handle
    pub store: Arc<dyn ClimateStore>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(config: Config, store: Arc<dyn ClimateStore>) -> Self {
        Self { config, store }
    }

    /// Create a new AppState wrapped in an Arc for shared ownership
    pub fn new_shared(config: Config, store: Arc<dyn ClimateStore>) -> Arc<Self> {
        Arc::new(Self::new(config, store))
    }

    /// Check that the dataset can be queried and describe what it holds.
    ///
    /// An empty `measurement` table is allowed; the endpoints that need a
    /// latest date report it per request.
    pub async fn validate(&self) -> Result<DatasetSummary> {
        let summary = self.store.summary().await?;

        // The 365-day window is anchored on this value
        if let Some(latest) = &summary.latest_date {
            window_start(latest)?;
        }

        Ok(summary)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
