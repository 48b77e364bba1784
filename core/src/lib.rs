//! # kiosk Core
//!
//! Core library for kiosk - a departure board driven by a static route table.
//!
//! This library provides the route table and its navigator, the views the
//! routes point at, and the departure data those views display. It has no
//! terminal or UI dependencies; hosts draw the [`views::Frame`]s it produces.

// Core modules
pub mod config;
pub mod departures;
pub mod error;
pub mod router;
pub mod routes;
pub mod views;

// Re-export commonly used types
pub use config::KioskConfig;
pub use error::{ConfigError, Error, Result, RouteError};
pub use router::{BasePath, Navigation, Navigator, Resolution, Route, RouteTable};
pub use routes::kiosk_routes;
pub use views::{Frame, RenderContext, Renderable, ViewRef};

/// Current version of the kiosk-core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
