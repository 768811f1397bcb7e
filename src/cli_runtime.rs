use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use fitcoach::model::{ClientConfig, LOG_ENV};

use crate::Commands;

#[derive(Parser)]
#[command(name = "fitcoach")]
#[command(about = "Fitness coaching client", long_about = None)]
pub(crate) struct Cli {
    /// API base URL (overrides FITCOACH_API_URL)
    #[arg(long, global = true, value_name = "URL")]
    api_url: Option<String>,

    /// Directory holding the session file (overrides FITCOACH_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    state_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let cfg = ClientConfig::resolve(cli.api_url, cli.state_dir)?;
    tracing::debug!(base_url = %cfg.base_url, state_dir = %cfg.state_dir.display(), "config resolved");
    crate::cli_exec::handle_command(&cfg, cli.command)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
