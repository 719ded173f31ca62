// src/bin/snapshot.rs
//! File-mode entry point: runs the same read pipeline and writes the
//! report as one JSON snapshot.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ironwhisper::blockchain::{EthereumClient, WalletConnector};
use ironwhisper::core::errors::InspectError;
use ironwhisper::core::targets::load_targets;
use ironwhisper::core::{Inspector, NetworkConfig};
use ironwhisper::sink::{append_run_log, JsonFileSink};

const APP_NAME: &str = "Ironwhisper";

#[derive(Parser)]
#[command(name = "snapshot")]
#[command(about = "Read-only chain inspector (JSON snapshot)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Network config file; missing or malformed falls back to Base Sepolia
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Target-address list for bytecode checks
    #[arg(long, default_value = "inputs/targets.json")]
    targets: PathBuf,

    /// Snapshot output path
    #[arg(long, default_value = "reports/latest.json")]
    output: PathBuf,

    /// Run log path
    #[arg(long, default_value = "logs/run.log")]
    log: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    if let Err(err) = run(&args).await {
        // The failure reaches the run log before the process reports it.
        append_run_log(&args.log, &format!("error: {}", err));
        return Err(err.into());
    }
    Ok(())
}

async fn run(args: &Args) -> Result<(), InspectError> {
    let config = NetworkConfig::load_or_default(&args.config);
    let targets = load_targets(&args.targets);

    let wallet = WalletConnector::new(&config.rpc_url, APP_NAME)?;
    let chain = EthereumClient::new(&config.rpc_url)?;

    let inspector = Inspector::new(config, Box::new(wallet), Box::new(chain));
    let mut sink = JsonFileSink::new(args.output.clone(), args.log.clone());
    inspector.run(&targets, &mut sink).await?;
    Ok(())
}

fn init_logging() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
