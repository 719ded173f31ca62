//! Report model and builder.
//!
//! One report value per run, assembled after all reads complete and never
//! mutated afterwards. The console sink and the JSON sink present the same
//! facts; only the rendering differs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::config::NetworkConfig;
use crate::core::units::iso_millis;

/// Accounts the wallet provider exposed, in provider order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSnapshot {
    pub connected: bool,
    pub addresses: Vec<String>,
}

/// Native balance of one wallet address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceEntry {
    pub address: String,
    pub balance_eth: String,
    pub basescan: String,
}

/// Latest block and gas facts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainHead {
    pub latest_block: String,
    pub block_link: String,
    pub timestamp_iso: String,
    pub gas_price_gwei: String,
}

/// Bytecode presence at one target address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BytecodeCheck {
    pub address: String,
    pub has_bytecode: bool,
    pub code_link: String,
}

/// The full inspection report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub built_for: String,
    pub network: String,
    pub chain_id: u64,
    pub explorer: String,
    pub rpc_url: String,
    pub generated_at: String,
    pub wallet: WalletSnapshot,
    pub balances: Vec<BalanceEntry>,
    pub chain: ChainHead,
    pub bytecode: Vec<BytecodeCheck>,
}

/// Assembles the report. Pure function of its inputs; no I/O.
pub fn build_report(
    config: &NetworkConfig,
    generated_at: DateTime<Utc>,
    wallet: WalletSnapshot,
    balances: Vec<BalanceEntry>,
    chain: ChainHead,
    bytecode: Vec<BytecodeCheck>,
) -> Report {
    Report {
        built_for: config.built_for().to_string(),
        network: config.slug(),
        chain_id: config.chain_id,
        explorer: config.explorer.clone(),
        rpc_url: config.rpc_url.clone(),
        generated_at: iso_millis(generated_at),
        wallet,
        balances,
        chain,
        bytecode,
    }
}

/// Abbreviated address for console lines: first 6 and last 4 characters.
pub fn short(address: &str) -> String {
    if address.len() <= 10 {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}
