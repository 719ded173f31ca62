//! Read pipeline facade.
//!
//! Composes the wallet source and the chain source into the sequence of
//! reads both entry points share: accounts, per-address balances, latest
//! block and gas, per-target bytecode presence. Reads are issued strictly
//! sequentially, each awaited before the next.

use chrono::Utc;
use ethers::types::{Address, U256};
use ethers::utils::to_checksum;
use tracing::{debug, info, warn};

use crate::blockchain::traits::{ChainSource, WalletSource};
use crate::core::config::NetworkConfig;
use crate::core::errors::InspectError;
use crate::core::units::{unix_to_iso, wei_to_eth, wei_to_gwei};
use crate::core::validation::parse_target_address;
use crate::report::{build_report, BalanceEntry, BytecodeCheck, ChainHead, Report, WalletSnapshot};
use crate::sink::ReportSink;

pub struct Inspector {
    config: NetworkConfig,
    wallet: Box<dyn WalletSource>,
    chain: Box<dyn ChainSource>,
}

impl Inspector {
    pub fn new(
        config: NetworkConfig,
        wallet: Box<dyn WalletSource>,
        chain: Box<dyn ChainSource>,
    ) -> Self {
        Self { config, wallet, chain }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Accounts the wallet provider exposes. Wallet context is optional:
    /// any failure (no provider, rejected, timed out) degrades to an empty
    /// list so the rest of the report is still producible.
    pub async fn connected_addresses(&self) -> Vec<Address> {
        match self.wallet.accounts().await {
            Ok(addresses) => addresses,
            Err(err) => {
                warn!(error = %err, "wallet provider unavailable, continuing without accounts");
                Vec::new()
            }
        }
    }

    /// Native balance of one wallet address. Failures propagate: a broken
    /// RPC is not the same as an absent wallet.
    pub async fn native_balance(&self, address: Address) -> Result<BalanceEntry, InspectError> {
        let wei = self.chain.balance_of(address).await?;
        let display = to_checksum(&address, None);
        Ok(BalanceEntry {
            basescan: self.config.address_link(&display),
            balance_eth: wei_to_eth(wei),
            address: display,
        })
    }

    /// Latest block number, its timestamp, and the current gas price, as
    /// three sequential reads.
    pub async fn latest_head(&self) -> Result<ChainHead, InspectError> {
        let number = self.chain.block_number().await?;
        let block = self
            .chain
            .block(number)
            .await?
            .ok_or_else(|| InspectError::Rpc(format!("block {} not found", number)))?;
        let gas_price = self.chain.gas_price().await?;

        if block.timestamp > U256::from(u64::MAX) {
            return Err(InspectError::Rpc(format!(
                "block timestamp out of range: {}",
                block.timestamp
            )));
        }
        let timestamp_iso = unix_to_iso(block.timestamp.as_u64()).ok_or_else(|| {
            InspectError::Rpc(format!("block timestamp out of range: {}", block.timestamp))
        })?;

        let latest_block = number.to_string();
        Ok(ChainHead {
            block_link: self.config.block_link(&latest_block),
            latest_block,
            timestamp_iso,
            gas_price_gwei: wei_to_gwei(gas_price),
        })
    }

    /// Bytecode presence at one target address. A target that fails address
    /// validation is skipped, not an error; the skip is explicit in the
    /// return type.
    pub async fn bytecode_check(
        &self,
        raw: &str,
    ) -> Result<Option<BytecodeCheck>, InspectError> {
        let Some(address) = parse_target_address(raw) else {
            debug!(address = raw, "skipping malformed target address");
            return Ok(None);
        };
        let code = self.chain.code_at(address).await?;
        Ok(Some(BytecodeCheck {
            address: raw.to_string(),
            has_bytecode: !code.is_empty(),
            code_link: self.config.code_link(raw),
        }))
    }

    /// Runs the whole pipeline once, streaming facts into `sink` as they
    /// arrive and handing it the assembled report at the end.
    pub async fn run(
        &self,
        targets: &[String],
        sink: &mut dyn ReportSink,
    ) -> Result<Report, InspectError> {
        let addresses = self.connected_addresses().await;
        let wallet = WalletSnapshot {
            connected: !addresses.is_empty(),
            addresses: addresses.iter().map(|a| to_checksum(a, None)).collect(),
        };
        sink.wallet_section(&wallet);

        let mut balances = Vec::with_capacity(addresses.len());
        for address in &addresses {
            let entry = self.native_balance(*address).await?;
            sink.balance(&entry);
            balances.push(entry);
        }

        let head = self.latest_head().await?;
        sink.chain_head(&head);

        sink.bytecode_section();
        let mut bytecode = Vec::new();
        for raw in targets {
            if let Some(check) = self.bytecode_check(raw).await? {
                sink.bytecode(&check);
                bytecode.push(check);
            }
        }

        let report = build_report(&self.config, Utc::now(), wallet, balances, head, bytecode);
        sink.finish(&report)?;
        info!(
            balances = report.balances.len(),
            bytecode = report.bytecode.len(),
            "inspection complete"
        );
        Ok(report)
    }
}
