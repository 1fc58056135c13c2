use anyhow::Context;
use clap::Parser;
use tracing::debug;

use tax_cli::app::{self, RunContext};
use tax_cli::cli::Cli;
use tax_cli::config::AppConfig;
use tax_cli::logging;

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    logging::init_logging(&config.log_level);
    debug!(?config, "configuration resolved");

    let ctx = RunContext::new(config, cli.format);
    let output = app::run(cli, &ctx)?;
    print!("{output}");

    Ok(())
}
