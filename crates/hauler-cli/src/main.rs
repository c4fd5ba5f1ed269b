use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use hauler_infrastructure::BackendKind;
use tracing_subscriber::EnvFilter;

mod bootstrap;
mod shell;

#[derive(Parser)]
#[command(name = "hauler")]
#[command(about = "Hauler - request and track waste pickups", long_about = None)]
struct Cli {
    /// Backend to run against (overrides the config file)
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// Remote backend base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Remote backend API key
    #[arg(long)]
    api_key: Option<String>,

    /// Start the in-memory backend signed out and unseeded
    #[arg(long)]
    fresh: bool,

    /// Config file path (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendArg {
    Memory,
    Remote,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Memory => BackendKind::Memory,
            BackendArg::Remote => BackendKind::Remote,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hauler=warn")),
        1 => EnvFilter::new("hauler=debug"),
        _ => EnvFilter::new("debug"),
    };
    // Logs go to stderr so they never interleave with the prompt
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let services = bootstrap::build(&cli).await?;
    shell::run(services).await
}
