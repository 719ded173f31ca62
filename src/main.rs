// src/main.rs
//! Console-mode entry point: prints the inspection report section by
//! section as the reads complete.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ironwhisper::blockchain::probe::rpc_chain_id;
use ironwhisper::blockchain::{EthereumClient, WalletConnector};
use ironwhisper::core::targets::load_targets;
use ironwhisper::core::{Inspector, NetworkConfig};
use ironwhisper::sink::ConsoleSink;

const APP_NAME: &str = "Ironwhisper";

#[derive(Parser)]
#[command(name = "inspect")]
#[command(about = "Read-only chain inspector (console report)")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Network config file; missing or malformed falls back to Base Sepolia
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Target-address list for bytecode checks
    #[arg(long, default_value = "inputs/targets.json")]
    targets: PathBuf,

    /// Run log path
    #[arg(long, default_value = "logs/run.log")]
    log: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging()?;

    let config = NetworkConfig::load_or_default(&args.config);

    println!("Built for {}", config.built_for());
    println!("network: {}", config.name);
    println!("chainId (decimal): {}", config.chain_id);
    println!("explorer: {}", config.explorer);
    println!();

    // Advisory identity probe; reported inline, never fatal.
    println!("rpc identity:");
    match rpc_chain_id(&config.rpc_url).await {
        Ok(chain_id) => println!("- eth_chainId: {}", chain_id),
        Err(err) => println!("- rpc probe failed: {}", err),
    }
    println!();

    let targets = load_targets(&args.targets);
    let wallet = WalletConnector::new(&config.rpc_url, APP_NAME)?;
    let chain = EthereumClient::new(&config.rpc_url)?;

    let inspector = Inspector::new(config, Box::new(wallet), Box::new(chain));
    let mut sink = ConsoleSink::new(args.log);
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
