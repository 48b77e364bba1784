//! `kiosk show`

use super::load_routes;
use crate::config::CliConfigLoader;
use crate::output::render_frame;
use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use colored::Colorize;
use kiosk_core::departures::{refresh_boards, source_from_config, Boards};
use kiosk_core::{Frame, KioskConfig, Navigation, Navigator, RenderContext};
use std::sync::Arc;
use tracing::debug;

/// What `kiosk show` should open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShowTarget {
    Home,
    Location(String),
    Name(String),
}

/// Render the active view as of `at`; a one-shot show renders twice at one instant
fn frame_at(
    navigator: &Navigator,
    boards: &Boards,
    at: DateTime<Local>,
    config: &KioskConfig,
) -> Option<Frame> {
    let ctx = RenderContext::new(boards, at, at)
        .with_cycle_interval(config.cycle_interval())
        .with_limit(config.departures_limit);
    navigator.render(&ctx)
}

/// Fetch the departures a view needs and print it once as a text board
pub async fn show_command(target: ShowTarget, config_loader: CliConfigLoader) -> Result<()> {
    let config = config_loader.load().await?;
    let table = Arc::new(load_routes()?);
    let mut navigator = Navigator::new(table, config.base()).with_max_history(config.history_limit);

    let navigation = match target {
        ShowTarget::Home => None,
        ShowTarget::Location(location) => Some(navigator.push(location)),
        ShowTarget::Name(name) => Some(
            navigator
                .push_named(&name)
                .with_context(|| format!("Cannot show '{}'", name))?,
        ),
    };

    if let Some(Navigation::NotFound { location }) = navigation {
        eprintln!("{} Route Not Found: '{}'", "✗".red(), location);
        std::process::exit(1);
    }

    let started_at = Local::now();
    let mut boards = Boards::new();

    // Render once against empty feeds to learn which board the view shows
    let Some(pending) = frame_at(&navigator, &boards, started_at, &config) else {
        return Ok(());
    };

    let source = source_from_config(&config).context("Failed to set up departures source")?;
    debug!(source = %source.describe(), board = pending.board.key(), "fetching departures");
    refresh_boards(source.as_ref(), &[pending.board], &mut boards).await;

    if let Some(frame) = frame_at(&navigator, &boards, started_at, &config) {
        print!("{}", render_frame(&frame));
    }

    Ok(())
}
