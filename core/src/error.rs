//! Error types and handling for kiosk core

use thiserror::Error;

/// Result type alias for kiosk operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for kiosk core
#[derive(Error, Debug)]
pub enum Error {
    /// Route table and navigation errors
    #[error("Route error: {0}")]
    Route(#[from] RouteError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The departures backend answered with an error payload
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Malformed endpoint URLs
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

/// Route registration and lookup errors
///
/// Registration errors are raised while the table is built and are fatal:
/// no partially registered table is ever handed out.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No routes configured")]
    NoRoutes,

    #[error("Duplicate route path '{0}'")]
    DuplicatePath(String),

    #[error("Duplicate route name '{0}'")]
    DuplicateName(String),

    #[error("No route registered for the root path '/'")]
    MissingRoot,

    #[error("Invalid route path '{0}': paths must start with '/'")]
    InvalidPath(String),

    #[error("Route names cannot be empty (path '{0}')")]
    EmptyName(String),

    #[error("Route '{0}' not found")]
    UnknownName(String),
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for field '{field}': {value}")]
    InvalidValue { field: String, value: String },

    #[error("File not found: {path}")]
    FileNotFound { path: String },
}
