//! Report sinks.
//!
//! The console sink prints each fact as it arrives; the file sink ignores
//! the streaming hooks and writes the whole snapshot once at the end. Both
//! append one line to the run log on completion.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::warn;

use crate::core::errors::InspectError;
use crate::core::units::iso_millis;
use crate::report::{short, BalanceEntry, BytecodeCheck, ChainHead, Report, WalletSnapshot};

/// Receives facts as the pipeline produces them, then the finished report.
///
/// Streaming hooks default to no-ops so batch sinks only implement
/// `finish`.
pub trait ReportSink {
    fn wallet_section(&mut self, _wallet: &WalletSnapshot) {}
    fn balance(&mut self, _entry: &BalanceEntry) {}
    fn chain_head(&mut self, _head: &ChainHead) {}
    fn bytecode_section(&mut self) {}
    fn bytecode(&mut self, _check: &BytecodeCheck) {}

    /// Called once, after the report is fully assembled.
    fn finish(&mut self, report: &Report) -> Result<(), InspectError>;
}

/// Appends `[<ISO-8601>] <message>` to the run log, creating the parent
/// directory if needed. Best-effort: a failed append is only warned about.
pub fn append_run_log(path: &Path, message: &str) {
    let line = format!("[{}] {}\n", iso_millis(Utc::now()), message);
    let append = || -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())
    };
    if let Err(err) = append() {
        warn!(path = %path.display(), error = %err, "failed to append run log");
    }
}

/// Streams formatted fact lines to standard output.
pub struct ConsoleSink {
    log_path: PathBuf,
}

impl ConsoleSink {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }
}

impl ReportSink for ConsoleSink {
    fn wallet_section(&mut self, wallet: &WalletSnapshot) {
        if wallet.connected {
            println!("wallet balances:");
        } else {
            println!("wallet balances: skipped (no addresses available)");
        }
    }

    fn balance(&mut self, entry: &BalanceEntry) {
        println!("- {}: {} ETH", short(&entry.address), entry.balance_eth);
        println!("  {}", entry.basescan);
    }

    fn chain_head(&mut self, head: &ChainHead) {
        println!();
        println!("block and gas:");
        println!("- latest block: {}", head.latest_block);
        println!("  {}", head.block_link);
        println!("- timestamp: {}", head.timestamp_iso);
        println!("- gas price gwei: {}", head.gas_price_gwei);
    }

    fn bytecode_section(&mut self) {
        println!();
        println!("bytecode checks:");
    }

    fn bytecode(&mut self, check: &BytecodeCheck) {
        let verdict = if check.has_bytecode { "bytecode found" } else { "no bytecode" };
        println!("- {}: {}", short(&check.address), verdict);
        println!("  {}", check.code_link);
    }

    fn finish(&mut self, _report: &Report) -> Result<(), InspectError> {
        append_run_log(&self.log_path, "inspect completed");
        println!();
        println!("done");
        Ok(())
    }
}

/// Writes the snapshot as one pretty-printed JSON document, fully
/// overwriting any previous snapshot.
pub struct JsonFileSink {
    output_path: PathBuf,
    log_path: PathBuf,
}

impl JsonFileSink {
    pub fn new(output_path: PathBuf, log_path: PathBuf) -> Self {
        Self { output_path, log_path }
    }
}

impl ReportSink for JsonFileSink {
    fn finish(&mut self, report: &Report) -> Result<(), InspectError> {
        if let Some(parent) = self.output_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.output_path, serde_json::to_vec_pretty(report)?)?;
        append_run_log(&self.log_path, &format!("wrote {}", self.output_path.display()));
        println!("snapshot written: {}", self.output_path.display());
        Ok(())
    }
}
