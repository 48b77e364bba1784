//! `kiosk resolve <location>`

use super::load_routes;
use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use kiosk_core::{BasePath, Resolution, RouteTable, ViewRef};
use tracing::debug;

/// Describe the route a location activates, `None` when nothing matches
pub fn describe_match(
    table: &RouteTable<ViewRef>,
    base: &BasePath,
    location: &str,
) -> Option<String> {
    let path = base.strip(location)?;
    debug!(location, path = %path, "resolving");

    match table.resolve(&path) {
        Resolution::Matched(route) => Some(format!(
            "{} -> {} ({}, {})",
            location,
            route.path.cyan(),
            route.name.as_str().bold(),
            route.view.name()
        )),
        Resolution::Unresolved { .. } => None,
    }
}

/// Resolve a location and print the matched route; exits with status 1 on no match
pub async fn resolve_command(location: String, config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let table = load_routes()?;
    let base = config.base();

    match describe_match(&table, &base, &location) {
        Some(description) => {
            println!("{}", description);
            Ok(())
        }
        None => {
            eprintln!("{} No route matches '{}' (base path {})", "✗".red(), location, base);
            std::process::exit(1);
        }
    }
}
