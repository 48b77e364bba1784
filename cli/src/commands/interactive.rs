//! Interactive mode command

use crate::config::CliConfigLoader;
use crate::interactive::run_interactive;
use anyhow::Result;
use tracing::debug;

/// Start the interactive board, optionally opening on a given location
pub async fn interactive_command(
    config_loader: CliConfigLoader,
    open: Option<String>,
) -> Result<()> {
    let config = config_loader.load().await?;
    debug!(
        base_path = %config.base_path,
        cycle_secs = config.cycle_interval_secs,
        refresh_secs = config.refresh_interval_secs,
        "loaded configuration"
    );

    run_interactive(config, open).await
}
