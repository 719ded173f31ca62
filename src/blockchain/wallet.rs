use std::time::Duration;

use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider};
use ethers::types::Address;
use tracing::debug;

use crate::blockchain::traits::WalletSource;
use crate::core::errors::InspectError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Address discovery against a wallet provider endpoint (`eth_accounts`).
///
/// The connection handshake itself belongs to the external provider; this
/// connector only asks it which accounts are currently exposed.
#[derive(Clone)]
pub struct WalletConnector<P: JsonRpcClient + Clone = Http> {
    provider: Provider<P>,
    app_name: String,
}

impl WalletConnector<Http> {
    pub fn new(rpc_url: &str, app_name: &str) -> Result<Self, InspectError> {
        let parsed_url = reqwest::Url::parse(rpc_url.trim())
            .map_err(|e| InspectError::Config(format!("invalid wallet RPC URL '{}': {}", rpc_url, e)))?;

        let client = reqwest::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| InspectError::Config(format!("failed to build HTTP client: {}", e)))?;

        let provider = Provider::new(Http::new_with_client(parsed_url, client));
        Ok(Self { provider, app_name: app_name.to_string() })
    }
}

impl<P: JsonRpcClient + Clone> WalletConnector<P> {
    /// Wraps an existing provider. Useful for testing with a `MockProvider`.
    pub fn new_with_provider(provider: Provider<P>, app_name: &str) -> Self {
        Self { provider, app_name: app_name.to_string() }
    }
}

#[async_trait]
impl<P> WalletSource for WalletConnector<P>
where
    P: JsonRpcClient + Clone + 'static,
{
    async fn accounts(&self) -> Result<Vec<Address>, InspectError> {
        debug!(app = %self.app_name, "eth_accounts");
        self.provider
            .get_accounts()
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to list wallet accounts: {}", e)))
    }
}
