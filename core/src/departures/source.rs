//! Departure sources
//!
//! Views never fetch data themselves: the host asks a [`DepartureSource`] for
//! each board and hands the results to the views through the render context.

use super::types::{Board, Boards, Departure};
use crate::config::KioskConfig;
use crate::error::{ConfigError, Error, Result};
use async_trait::async_trait;
use chrono::Local;
use futures::future::join_all;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Anything that can produce the departures for a board
#[async_trait]
pub trait DepartureSource: Send + Sync {
    /// Fetch the current departures for a board
    async fn fetch(&self, board: Board) -> Result<Vec<Departure>>;

    /// Short description used in logs and status lines
    fn describe(&self) -> String;
}

/// Error payload returned by the departures backend
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: String,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a failed response body into a readable message
fn api_error_message(body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            error,
            message: Some(message),
        }) => format!("{}: {}", message, error),
        Ok(ApiErrorBody { error, message: None }) => error,
        Err(_) if body.trim().is_empty() => "empty response".to_string(),
        Err(_) => body.trim().to_string(),
    }
}

/// Departures fetched over HTTP from the departures backend
pub struct HttpDepartureSource {
    client: Client,
    base_url: Url,
    endpoints: HashMap<Board, String>,
}

impl HttpDepartureSource {
    /// Create a source from the resolved configuration
    pub fn new(config: &KioskConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        // A trailing slash makes relative endpoints join under the base path
        let mut raw = config.api_base_url.clone();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base_url = Url::parse(&raw)?;

        let endpoints = Board::ALL
            .into_iter()
            .map(|board| (board, config.endpoints.get(board).to_string()))
            .collect();

        Ok(Self {
            client,
            base_url,
            endpoints,
        })
    }

    /// Full URL for a board's endpoint
    pub fn endpoint_url(&self, board: Board) -> Result<Url> {
        let endpoint = self
            .endpoints
            .get(&board)
            .map(String::as_str)
            .unwrap_or_default();
        Ok(self.base_url.join(endpoint)?)
    }
}

#[async_trait]
impl DepartureSource for HttpDepartureSource {
    async fn fetch(&self, board: Board) -> Result<Vec<Departure>> {
        let url = self.endpoint_url(board)?;
        debug!(board = board.key(), %url, "fetching departures");

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status,
                message: api_error_message(&body),
            });
        }

        Ok(response.json().await?)
    }

    fn describe(&self) -> String {
        self.base_url.to_string()
    }
}

/// Departures read from a JSON snapshot on disk
///
/// The file maps board keys to arrays of departures:
/// `{"cathedral_quarter": [...], "bus_station": [...]}`. It is re-read on
/// every fetch so an external process can keep it fresh.
pub struct SnapshotDepartureSource {
    path: PathBuf,
}

impl SnapshotDepartureSource {
    /// Create a source reading the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<HashMap<Board, Vec<Departure>>> {
        if !self.path.exists() {
            return Err(ConfigError::FileNotFound {
                path: self.path.display().to_string(),
            }
            .into());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let raw: HashMap<String, Vec<Departure>> = serde_json::from_str(&content)?;

        let mut boards = HashMap::new();
        for (key, departures) in raw {
            match Board::from_key(&key) {
                Some(board) => {
                    boards.insert(board, departures);
                }
                None => warn!(key = %key, "ignoring unknown board in snapshot"),
            }
        }
        Ok(boards)
    }
}

#[async_trait]
impl DepartureSource for SnapshotDepartureSource {
    async fn fetch(&self, board: Board) -> Result<Vec<Departure>> {
        let mut boards = self.load().await?;
        Ok(boards.remove(&board).unwrap_or_default())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Build the source selected by the configuration
///
/// A snapshot file, when configured, wins over the HTTP backend.
pub fn source_from_config(config: &KioskConfig) -> Result<Box<dyn DepartureSource>> {
    match &config.snapshot {
        Some(path) => Ok(Box::new(SnapshotDepartureSource::new(path.clone()))),
        None => Ok(Box::new(HttpDepartureSource::new(config)?)),
    }
}

/// Fetch several boards concurrently
///
/// Each board gets its own result; one failing board never hides the others.
pub async fn fetch_all(
    source: &dyn DepartureSource,
    boards: &[Board],
) -> Vec<(Board, Result<Vec<Departure>>)> {
    let fetches = boards.iter().map(|&board| async move { (board, source.fetch(board).await) });
    join_all(fetches).await
}

/// Fetch several boards and fold the results into `target`
pub async fn refresh_boards(source: &dyn DepartureSource, boards: &[Board], target: &mut Boards) {
    for (board, result) in fetch_all(source, boards).await {
        match result {
            Ok(departures) => {
                debug!(board = board.key(), count = departures.len(), "departures updated");
                target.set_ready(board, departures, Local::now());
            }
            Err(e) => {
                warn!(board = board.key(), error = %e, "failed to fetch departures");
                target.set_failed(board, e.to_string());
            }
        }
    }
}
