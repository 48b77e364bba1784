//! Router module for the kiosk's route table and navigation
//!
//! The route table is a static, validated list of (path, name, view)
//! bindings. The navigator drives it: it tracks the current location,
//! applies the base path and activates views.

pub mod base;
pub mod navigator;
pub mod route;
pub mod table;

// Re-export commonly used types
pub use base::BasePath;
pub use navigator::{Navigation, Navigator, NavigatorState, DEFAULT_MAX_HISTORY};
pub use route::{Route, RouteName};
pub use table::{Resolution, RouteResult, RouteTable, RouteTableBuilder};
