//! # bridge-cli
//!
//! Operator tool for a two-chain burn/mint bridge devnet.
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line
//! 2. Initialize logging (stderr; stdout carries the JSON result)
//! 3. Load configuration from the environment
//! 4. Run the command and print its result

use anyhow::{Context, Result};
use bb_runtime::{run, Cli, RuntimeConfig};
use bb_telemetry::{init_telemetry, log_event, TelemetryConfig};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _telemetry = init_telemetry(TelemetryConfig::for_component("cli"))
        .context("Failed to initialize logging")?;

    let mut config = RuntimeConfig::from_env().context("Failed to read configuration")?;
    if let Some(path) = cli.state {
        config = config.with_state_path(path);
    }
    log_event!(debug, "cli", "Configuration loaded", state = %config.state_path.display());

    let output = run(cli.command, &config).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("Failed to render output")?
    );
    Ok(())
}
