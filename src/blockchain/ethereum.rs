use std::time::Duration;

use async_trait::async_trait;
use ethers::providers::{Http, JsonRpcClient, Middleware, Provider};
use ethers::types::{Address, Block, Bytes, H256, U256, U64};
use tracing::debug;

use crate::blockchain::traits::ChainSource;
use crate::core::errors::InspectError;

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Chain-state reader over an HTTP JSON-RPC provider.
#[derive(Clone)]
pub struct EthereumClient<P: JsonRpcClient + Clone = Http> {
    provider: Provider<P>,
}

impl EthereumClient<Http> {
    pub fn new(rpc_url: &str) -> Result<Self, InspectError> {
        let parsed_url = reqwest::Url::parse(rpc_url.trim())
            .map_err(|e| InspectError::Config(format!("invalid RPC URL '{}': {}", rpc_url, e)))?;

        // Short request timeout; honor proxy environment variables.
        let mut builder = reqwest::Client::builder().timeout(HTTP_TIMEOUT);
        if let Ok(proxy) = std::env::var("HTTPS_PROXY").or_else(|_| std::env::var("HTTP_PROXY")) {
            if let Ok(p) = reqwest::Proxy::all(proxy) {
                builder = builder.proxy(p);
            }
        }
        let client = builder
            .build()
            .map_err(|e| InspectError::Config(format!("failed to build HTTP client: {}", e)))?;

        let provider = Provider::new(Http::new_with_client(parsed_url, client));
        Ok(Self { provider })
    }
}

impl<P: JsonRpcClient + Clone> EthereumClient<P> {
    /// Wraps an existing provider. Useful for testing with a `MockProvider`.
    pub fn new_with_provider(provider: Provider<P>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P> ChainSource for EthereumClient<P>
where
    P: JsonRpcClient + Clone + 'static,
{
    async fn balance_of(&self, address: Address) -> Result<U256, InspectError> {
        debug!(address = %address, "eth_getBalance");
        self.provider
            .get_balance(address, None)
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to get balance: {}", e)))
    }

    async fn block_number(&self) -> Result<U64, InspectError> {
        self.provider
            .get_block_number()
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to get block number: {}", e)))
    }

    async fn block(&self, number: U64) -> Result<Option<Block<H256>>, InspectError> {
        self.provider
            .get_block(number)
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to get block {}: {}", number, e)))
    }

    async fn gas_price(&self) -> Result<U256, InspectError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to get gas price: {}", e)))
    }

    async fn code_at(&self, address: Address) -> Result<Bytes, InspectError> {
        debug!(address = %address, "eth_getCode");
        self.provider
            .get_code(address, None)
            .await
            .map_err(|e| InspectError::Rpc(format!("failed to get code: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethers::providers::{MockProvider, MockResponse};
    use serde_json::json;
    use std::str::FromStr;

    fn mock_client() -> (EthereumClient<MockProvider>, MockProvider) {
        let mock = MockProvider::new();
        let client = EthereumClient::new_with_provider(Provider::new(mock.clone()));
        (client, mock)
    }

    fn test_address() -> Address {
        Address::from_str("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed").unwrap()
    }

    #[test]
    fn new_rejects_invalid_url() {
        assert!(EthereumClient::new("not a url").is_err());
    }

    #[test]
    fn new_accepts_http_url() {
        assert!(EthereumClient::new("http://127.0.0.1:8545").is_ok());
    }

    #[tokio::test]
    async fn balance_of_returns_wei() {
        let (client, mock) = mock_client();
        mock.push_response(MockResponse::Value(json!("0xde0b6b3a7640000"))); // 1 ETH

        let balance = client.balance_of(test_address()).await.unwrap();
        assert_eq!(balance, U256::from_dec_str("1000000000000000000").unwrap());
    }

    #[tokio::test]
    async fn block_number_returns_latest() {
        let (client, mock) = mock_client();
        mock.push_response(MockResponse::Value(json!("0x10")));

        let number = client.block_number().await.unwrap();
        assert_eq!(number, U64::from(16));
    }

    #[tokio::test]
    async fn gas_price_returns_wei() {
        let (client, mock) = mock_client();
        mock.push_response(MockResponse::Value(json!("0x3b9aca00"))); // 1 gwei

        let price = client.gas_price().await.unwrap();
        assert_eq!(price, U256::from(1_000_000_000u64));
    }

    #[tokio::test]
    async fn code_at_distinguishes_empty_and_deployed() {
        let (client, mock) = mock_client();
        mock.push_response(MockResponse::Value(json!("0x6080604052")));
        mock.push_response(MockResponse::Value(json!("0x")));

        // LIFO queue: the "0x" response is served first.
        let empty = client.code_at(test_address()).await.unwrap();
        assert!(empty.is_empty());

        let deployed = client.code_at(test_address()).await.unwrap();
        assert!(!deployed.is_empty());
    }

    #[tokio::test]
    async fn block_deserializes_timestamp() {
        let (client, mock) = mock_client();
        let zero32 = format!("0x{}", "0".repeat(64));
        let block_json = json!({
            "hash": zero32,
            "parentHash": zero32,
            "sha3Uncles": zero32,
            "miner": "0x0000000000000000000000000000000000000000",
            "stateRoot": zero32,
            "transactionsRoot": zero32,
            "receiptsRoot": zero32,
            "number": "0x10",
            "gasUsed": "0x0",
            "gasLimit": "0x1c9c380",
            "extraData": "0x",
            "logsBloom": format!("0x{}", "0".repeat(512)),
            "timestamp": "0x6553f080",
            "difficulty": "0x0",
            "totalDifficulty": "0x0",
            "sealFields": [],
            "uncles": [],
            "transactions": [],
            "size": "0x0",
            "mixHash": zero32,
            "nonce": "0x0000000000000000",
            "baseFeePerGas": "0x7"
        });
        mock.push_response(MockResponse::Value(block_json));

        let block = client.block(U64::from(16)).await.unwrap().unwrap();
        assert_eq!(block.timestamp, U256::from(0x6553f080u64));
        assert_eq!(block.number, Some(U64::from(16)));
    }

    #[tokio::test]
    async fn block_absent_is_none() {
        let (client, mock) = mock_client();
        mock.push_response(MockResponse::Value(json!(null)));

        let block = client.block(U64::from(999)).await.unwrap();
        assert!(block.is_none());
    }
}
