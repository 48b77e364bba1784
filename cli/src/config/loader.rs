//! Simple CLI configuration loader for kiosk
//!
//! Implements single-source priority loading with flag overrides:
//! 1. --config file/dir (highest priority)
//! 2. Current working directory: ./kiosk.json or ./.kiosk/config.json
//! 3. Git repository root: <repo_root>/.kiosk/config.json
//! 4. XDG config: $XDG_CONFIG_HOME/kiosk/config.json or ~/.config/kiosk/config.json
//! 5. Environment variables only (no files)

use anyhow::{anyhow, Context, Result};
use kiosk_core::config::BoardEndpoints;
use kiosk_core::KioskConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw configuration file format (simple single-file schema)
///
/// Every field is optional; missing fields take the core defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawConfig {
    /// Prefix for every route path, e.g. "/app/"
    pub base_path: Option<String>,
    /// Departures backend base URL
    pub api_url: Option<String>,
    /// Per-board endpoints relative to the API URL
    pub endpoints: Option<BoardEndpoints>,
    /// Offline snapshot file (can start with "~")
    pub snapshot: Option<String>,
    /// Seconds the home view shows each board
    pub cycle_interval_secs: Option<u64>,
    /// Seconds between refreshes in interactive mode
    pub refresh_interval_secs: Option<u64>,
    /// HTTP timeout in seconds
    pub request_timeout_secs: Option<u64>,
    /// Rows per board
    pub departures_limit: Option<usize>,
    /// Navigation history size
    pub history_limit: Option<usize>,
}

/// CLI configuration loader
pub struct CliConfigLoader {
    /// Override config file/directory path
    config_override: Option<PathBuf>,
    /// Flag overrides
    base_path_override: Option<String>,
    api_url_override: Option<String>,
    snapshot_override: Option<String>,
    limit_override: Option<usize>,
}

impl CliConfigLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            config_override: None,
            base_path_override: None,
            api_url_override: None,
            snapshot_override: None,
            limit_override: None,
        }
    }

    /// Set config file/directory override
    pub fn with_config_override(mut self, path: PathBuf) -> Self {
        self.config_override = Some(path);
        self
    }

    /// Set base path override
    pub fn with_base_path_override(mut self, base_path: String) -> Self {
        self.base_path_override = Some(base_path);
        self
    }

    /// Set API URL override
    pub fn with_api_url_override(mut self, api_url: String) -> Self {
        self.api_url_override = Some(api_url);
        self
    }

    /// Set snapshot file override
    pub fn with_snapshot_override(mut self, snapshot: String) -> Self {
        self.snapshot_override = Some(snapshot);
        self
    }

    /// Set row limit override
    pub fn with_limit_override(mut self, limit: usize) -> Self {
        self.limit_override = Some(limit);
        self
    }

    /// Load and resolve configuration
    pub async fn load(&self) -> Result<KioskConfig> {
        // Step 1: Find and load base configuration
        let mut config = if let Some(override_path) = &self.config_override {
            // Use explicit config override
            self.load_from_path(override_path).await.with_context(|| {
                format!(
                    "Failed to load config from override path: {}",
                    override_path.display()
                )
            })?
        } else {
            // Search in priority order
            self.search_and_load().await?
        };

        // Step 2: Apply flag overrides
        if let Some(base_path) = &self.base_path_override {
            config.base_path = Some(base_path.clone());
        }
        if let Some(api_url) = &self.api_url_override {
            config.api_url = Some(api_url.clone());
        }
        if let Some(snapshot) = &self.snapshot_override {
            config.snapshot = Some(snapshot.clone());
        }
        if let Some(limit) = self.limit_override {
            config.departures_limit = Some(limit);
        }

        // Step 3: Resolve to final kiosk config
        self.resolve_config(config)
    }

    /// Search for config in priority order
    async fn search_and_load(&self) -> Result<RawConfig> {
        // 1. Current working directory
        if let Some(config) = self.try_load_cwd().await? {
            return Ok(config);
        }

        // 2. Git repository root
        if let Some(config) = self.try_load_git_root().await? {
            return Ok(config);
        }

        // 3. XDG config directory
        if let Some(config) = self.try_load_xdg().await? {
            return Ok(config);
        }

        // 4. Environment variables only
        self.try_load_env_only()
    }

    /// Try loading from current working directory
    async fn try_load_cwd(&self) -> Result<Option<RawConfig>> {
        let cwd = std::env::current_dir()?;

        // Try ./kiosk.json first
        let kiosk_json = cwd.join("kiosk.json");
        if kiosk_json.exists() {
            return Ok(Some(self.load_file(&kiosk_json).await?));
        }

        // Try ./.kiosk/config.json
        let kiosk_dir_config = cwd.join(".kiosk").join("config.json");
        if kiosk_dir_config.exists() {
            return Ok(Some(self.load_file(&kiosk_dir_config).await?));
        }

        Ok(None)
    }

    /// Try loading from git repository root
    async fn try_load_git_root(&self) -> Result<Option<RawConfig>> {
        if let Some(git_root) = self.find_git_root()? {
            let config_path = git_root.join(".kiosk").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Try loading from XDG config directory
    async fn try_load_xdg(&self) -> Result<Option<RawConfig>> {
        if let Some(config_dir) = self.get_xdg_config_dir() {
            let config_path = config_dir.join("kiosk").join("config.json");
            if config_path.exists() {
                return Ok(Some(self.load_file(&config_path).await?));
            }
        }
        Ok(None)
    }

    /// Build a configuration from environment variables only
    fn try_load_env_only(&self) -> Result<RawConfig> {
        fn parsed<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
            match std::env::var(name) {
                Ok(value) => value
                    .trim()
                    .parse()
                    .map(Some)
                    .map_err(|_| anyhow!("Environment variable {} is not a number: {}", name, value)),
                Err(_) => Ok(None),
            }
        }

        Ok(RawConfig {
            base_path: std::env::var("KIOSK_BASE_PATH").ok(),
            api_url: std::env::var("KIOSK_API_URL").ok(),
            endpoints: None,
            snapshot: std::env::var("KIOSK_SNAPSHOT").ok(),
            cycle_interval_secs: parsed("KIOSK_CYCLE_SECS")?,
            refresh_interval_secs: parsed("KIOSK_REFRESH_SECS")?,
            request_timeout_secs: None,
            departures_limit: parsed("KIOSK_LIMIT")?,
            history_limit: None,
        })
    }

    /// Load configuration from a specific path (file or directory)
    async fn load_from_path(&self, path: &Path) -> Result<RawConfig> {
        if path.is_file() {
            self.load_file(path).await
        } else if path.is_dir() {
            // Try config.json in the directory
            let config_file = path.join("config.json");
            if config_file.exists() {
                self.load_file(&config_file).await
            } else {
                Err(anyhow!(
                    "No config.json found in directory: {}",
                    path.display()
                ))
            }
        } else {
            Err(anyhow!("Config path does not exist: {}", path.display()))
        }
    }

    /// Load a single config file
    async fn load_file(&self, path: &Path) -> Result<RawConfig> {
        debug!("Loading config file: {}", path.display());
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find git repository root
    fn find_git_root(&self) -> Result<Option<PathBuf>> {
        let mut current = std::env::current_dir()?;

        loop {
            if current.join(".git").exists() {
                return Ok(Some(current));
            }

            if let Some(parent) = current.parent() {
                current = parent.to_path_buf();
            } else {
                break;
            }
        }

        Ok(None)
    }

    /// Get XDG config directory
    fn get_xdg_config_dir(&self) -> Option<PathBuf> {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            Some(PathBuf::from(xdg_config))
        } else {
            dirs::home_dir().map(|home| home.join(".config"))
        }
    }

    /// Resolve raw config to KioskConfig
    fn resolve_config(&self, config: RawConfig) -> Result<KioskConfig> {
        let defaults = KioskConfig::default();

        // Expand "~" in the snapshot path
        let snapshot = config
            .snapshot
            .filter(|path| !path.trim().is_empty())
            .map(|path| PathBuf::from(shellexpand::tilde(&path).into_owned()));

        let resolved = KioskConfig {
            base_path: config.base_path.unwrap_or(defaults.base_path),
            api_base_url: config.api_url.unwrap_or(defaults.api_base_url),
            endpoints: config.endpoints.unwrap_or(defaults.endpoints),
            snapshot,
            cycle_interval_secs: config
                .cycle_interval_secs
                .unwrap_or(defaults.cycle_interval_secs),
            refresh_interval_secs: config
                .refresh_interval_secs
                .unwrap_or(defaults.refresh_interval_secs),
            request_timeout_secs: config
                .request_timeout_secs
                .unwrap_or(defaults.request_timeout_secs),
            departures_limit: config.departures_limit.unwrap_or(defaults.departures_limit),
            history_limit: config.history_limit.unwrap_or(defaults.history_limit),
        };

        // Validate
        resolved
            .validate()
            .map_err(|e| anyhow!("Configuration validation failed: {}", e))?;

        Ok(resolved)
    }
}

impl Default for CliConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("config.json");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    #[tokio::test]
    async fn test_load_from_file_with_defaults() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(
            dir.path(),
            r#"{"base_path": "/app/", "api_url": "http://board.local:8000/"}"#,
        );

        let config = CliConfigLoader::new()
            .with_config_override(path)
            .load()
            .await
            .expect("Failed to load config");

        assert_eq!(config.base_path, "/app/");
        assert_eq!(config.api_base_url, "http://board.local:8000/");
        assert_eq!(config.departures_limit, KioskConfig::default().departures_limit);
        assert!(config.snapshot.is_none());
    }

    #[tokio::test]
    async fn test_directory_override_and_flags() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        write_config(dir.path(), r#"{"base_path": "/app/", "departures_limit": 5}"#);

        let config = CliConfigLoader::new()
            .with_config_override(dir.path().to_path_buf())
            .with_base_path_override("/kiosk".to_string())
            .with_snapshot_override("departures.json".to_string())
            .with_limit_override(8)
            .load()
            .await
            .expect("Failed to load config");

        assert_eq!(config.base_path, "/kiosk");
        assert_eq!(config.departures_limit, 8);
        assert_eq!(config.snapshot, Some(PathBuf::from("departures.json")));
    }

    #[tokio::test]
    async fn test_invalid_values_fail_validation() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_config(dir.path(), r#"{"api_url": "ftp://board.local"}"#);

        let result = CliConfigLoader::new().with_config_override(path).load().await;
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("api_base_url"), "unexpected error: {}", message);
    }

    #[tokio::test]
    async fn test_missing_override_path() {
        let result = CliConfigLoader::new()
            .with_config_override(PathBuf::from("/nonexistent/kiosk.json"))
            .load()
            .await;

        assert!(result.is_err());
    }

    #[test]
    fn test_tilde_is_expanded_in_snapshot() {
        let loader = CliConfigLoader::new();
        let raw = RawConfig {
            snapshot: Some("~/departures.json".to_string()),
            ..RawConfig::default()
        };

        let config = loader.resolve_config(raw).expect("Failed to resolve");
        let snapshot = config.snapshot.expect("snapshot should be set");
        assert!(!snapshot.starts_with("~"));
        assert!(snapshot.ends_with("departures.json"));
    }
}
