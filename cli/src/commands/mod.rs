//! CLI command implementations

pub mod interactive;
pub mod resolve;
pub mod routes;
pub mod show;

pub use interactive::interactive_command;
pub use resolve::resolve_command;
pub use routes::routes_command;
pub use show::{show_command, ShowTarget};

use anyhow::{Context, Result};
use kiosk_core::{kiosk_routes, RouteTable, ViewRef};

/// Build the kiosk route table, failing fast on a registration error
pub(crate) fn load_routes() -> Result<RouteTable<ViewRef>> {
    kiosk_routes().context("Failed to register routes")
}
