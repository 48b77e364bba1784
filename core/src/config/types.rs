//! Configuration types for kiosk core
//!
//! Core only accepts fully resolved, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::departures::Board;
use crate::error::ConfigError;
use crate::router::BasePath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Backend endpoint for each board, relative to the API base URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardEndpoints {
    #[serde(default = "default_cathedral_quarter_endpoint")]
    pub cathedral_quarter: String,
    #[serde(default = "default_bus_station_endpoint")]
    pub bus_station: String,
}

fn default_cathedral_quarter_endpoint() -> String {
    "departures".to_string()
}

fn default_bus_station_endpoint() -> String {
    "departures/bus-station".to_string()
}

impl BoardEndpoints {
    /// Endpoint for a board
    pub fn get(&self, board: Board) -> &str {
        match board {
            Board::CathedralQuarter => &self.cathedral_quarter,
            Board::BusStation => &self.bus_station,
        }
    }
}

impl Default for BoardEndpoints {
    fn default() -> Self {
        Self {
            cathedral_quarter: default_cathedral_quarter_endpoint(),
            bus_station: default_bus_station_endpoint(),
        }
    }
}

/// A fully resolved kiosk configuration ready for use by core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Prefix applied to every route path
    pub base_path: String,
    /// Base URL of the departures backend
    pub api_base_url: String,
    /// Per-board backend endpoints
    #[serde(default)]
    pub endpoints: BoardEndpoints,
    /// Offline snapshot to read instead of the backend
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Seconds the home view shows each board before switching
    pub cycle_interval_secs: u64,
    /// Seconds between departure refreshes in interactive mode
    pub refresh_interval_secs: u64,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum rows per board
    pub departures_limit: usize,
    /// Maximum navigation history entries (0 disables history)
    pub history_limit: usize,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            base_path: "/".to_string(),
            api_base_url: "http://localhost:8000/".to_string(),
            endpoints: BoardEndpoints::default(),
            snapshot: None,
            cycle_interval_secs: 15,
            refresh_interval_secs: 60,
            request_timeout_secs: 10,
            departures_limit: 15,
            history_limit: 50,
        }
    }
}

impl KioskConfig {
    /// Parsed base path
    pub fn base(&self) -> BasePath {
        BasePath::parse(&self.base_path)
    }

    /// Home view cycle interval
    pub fn cycle_interval(&self) -> Duration {
        Duration::from_secs(self.cycle_interval_secs)
    }

    /// Interactive refresh interval
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &str, value: impl ToString) -> ConfigError {
            ConfigError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
            }
        }

        if self.base_path.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
            return Err(invalid("base_path", &self.base_path));
        }

        if self.snapshot.is_none() {
            if self.api_base_url.is_empty() {
                return Err(invalid("api_base_url", "cannot be empty"));
            }
            if !self.api_base_url.starts_with("http://") && !self.api_base_url.starts_with("https://") {
                return Err(invalid("api_base_url", &self.api_base_url));
            }
        }

        if self.cycle_interval_secs == 0 {
            return Err(invalid("cycle_interval_secs", self.cycle_interval_secs));
        }
        if self.refresh_interval_secs == 0 {
            return Err(invalid("refresh_interval_secs", self.refresh_interval_secs));
        }
        if self.request_timeout_secs == 0 {
            return Err(invalid("request_timeout_secs", self.request_timeout_secs));
        }
        if self.departures_limit == 0 {
            return Err(invalid("departures_limit", self.departures_limit));
        }

        Ok(())
    }
}
