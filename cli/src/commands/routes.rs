//! `kiosk routes`

use super::load_routes;
use crate::config::CliConfigLoader;
use anyhow::Result;
use colored::Colorize;
use kiosk_core::{BasePath, RouteTable, ViewRef};

/// Format the route listing, one line per route in registration order
pub fn format_routes(table: &RouteTable<ViewRef>, base: &BasePath) -> Vec<String> {
    table
        .routes()
        .map(|route| {
            let mut line = format!(
                "  {}  {}  {}  {}",
                format!("{:<4}", route.path).cyan(),
                format!("{:<18}", route.name.as_str()).bold(),
                format!("{:<22}", route.view.name()),
                base.href(&route.path).dimmed()
            );
            if let Some(description) = &route.description {
                line.push_str(&format!("  {}", description.dimmed()));
            }
            line
        })
        .collect()
}

/// List every registered route with its full location under the base path
pub async fn routes_command(config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let table = load_routes()?;
    let base = config.base();

    println!("{} (base path {})", "Routes".bold(), base);
    for line in format_routes(&table, &base) {
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kiosk_core::kiosk_routes;

    #[test]
    fn test_format_routes_lists_every_route() {
        colored::control::set_override(false);
        let table = kiosk_routes().unwrap();
        let lines = format_routes(&table, &BasePath::parse("/app/"));

        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("home"));
        assert!(lines[0].contains("HomeView"));
        assert!(lines[0].contains("/app/"));
        assert!(lines[1].contains("cathedralQuarter"));
        assert!(lines[1].contains("/app/cq"));
        assert!(lines[2].contains("busStation"));
        assert!(lines[2].contains("/app/bs"));
    }
}
