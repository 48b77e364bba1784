//! # kiosk CLI
//!
//! Command-line host for the kiosk departure board.
//!
//! ## Usage
//!
//! - `kiosk` - Start the interactive board
//! - `kiosk routes` - List the route table
//! - `kiosk resolve /cq` - Show which route a location activates
//! - `kiosk show /bs` - Print a board once as text
//!
//! The interactive board is drawn with iocraft; the one-shot commands print
//! plain text.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod interactive;
mod output;

use commands::{interactive_command, resolve_command, routes_command, show_command, ShowTarget};
use config::CliConfigLoader;

/// kiosk - A departure board driven by a static route table
#[derive(Parser)]
#[command(name = "kiosk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Departure boards for Derby's Cathedral Quarter and Bus Station")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file or directory path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base path the routes are served under (e.g. /app/)
    #[arg(long)]
    base_path: Option<String>,

    /// Departures API base URL override
    #[arg(long)]
    api_url: Option<String>,

    /// Read departures from a JSON snapshot instead of the API
    #[arg(long)]
    snapshot: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Location to open the interactive board on
    #[arg(long)]
    open: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes
    Routes,

    /// Resolve a location against the route table
    Resolve {
        /// Full location, including the base path
        location: String,
    },

    /// Fetch and print a view once
    Show {
        /// Full location, including the base path
        #[arg(conflicts_with = "name")]
        location: Option<String>,

        /// Route name instead of a location
        #[arg(long)]
        name: Option<String>,

        /// Maximum number of departures to print
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Build a configuration loader from CLI arguments
fn build_config_loader(cli: &Cli) -> CliConfigLoader {
    let mut loader = CliConfigLoader::new();

    if let Some(config_path) = &cli.config {
        loader = loader.with_config_override(config_path.clone());
    }

    if let Some(base_path) = &cli.base_path {
        loader = loader.with_base_path_override(base_path.clone());
    }

    if let Some(api_url) = &cli.api_url {
        loader = loader.with_api_url_override(api_url.clone());
    }

    if let Some(snapshot) = &cli.snapshot {
        loader = loader.with_snapshot_override(snapshot.clone());
    }

    if let Some(Commands::Show {
        limit: Some(limit), ..
    }) = &cli.command
    {
        loader = loader.with_limit_override(*limit);
    }

    loader
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over --verbose
    let filter = if cli.verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let config_loader = build_config_loader(&cli);

    match cli.command {
        Some(Commands::Routes) => routes_command(config_loader).await,
        Some(Commands::Resolve { location }) => resolve_command(location, config_loader).await,
        Some(Commands::Show { location, name, .. }) => {
            let target = match (location, name) {
                (_, Some(name)) => ShowTarget::Name(name),
                (Some(location), None) => ShowTarget::Location(location),
                (None, None) => ShowTarget::Home,
            };
            show_command(target, config_loader).await
        }
        None => interactive_command(config_loader, cli.open).await,
    }
}
