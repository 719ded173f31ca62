use async_trait::async_trait;
use ethers::types::{Address, Block, Bytes, H256, U256, U64};

use crate::core::errors::InspectError;

/// Address discovery through an external wallet provider.
///
/// Wallet context is optional: callers treat any failure here as "not
/// connected" rather than aborting the run.
#[async_trait]
pub trait WalletSource: Send + Sync {
    /// Lists the accounts the provider currently exposes, in provider order.
    async fn accounts(&self) -> Result<Vec<Address>, InspectError>;
}

/// Read-only access to chain state.
///
/// These are the core reads; a failure in any of them aborts the run,
/// since a report without them is not meaningful.
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Native balance of an address, in wei.
    async fn balance_of(&self, address: Address) -> Result<U256, InspectError>;

    /// Number of the most recent block.
    async fn block_number(&self) -> Result<U64, InspectError>;

    /// Full block at the given number, if the node knows it.
    async fn block(&self, number: U64) -> Result<Option<Block<H256>>, InspectError>;

    /// Current gas price, in wei.
    async fn gas_price(&self) -> Result<U256, InspectError>;

    /// Deployed bytecode at an address; empty when nothing is deployed.
    async fn code_at(&self, address: Address) -> Result<Bytes, InspectError>;
}
