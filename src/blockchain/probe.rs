//! Advisory RPC identity probe.
//!
//! A single raw `eth_chainId` call against the endpoint, separate from the
//! read pipeline. The console entry point reports its outcome inline; a
//! failure here never aborts a run.

use std::time::Duration;

use serde_json::{json, Value};

use crate::core::errors::InspectError;

const PROBE_TIMEOUT: Duration = Duration::from_secs(9);

/// Asks the endpoint for its chain id, returned as the raw hex string
/// from the JSON-RPC response.
pub async fn rpc_chain_id(rpc_url: &str) -> Result<String, InspectError> {
    let payload = json!({"jsonrpc": "2.0", "id": 1, "method": "eth_chainId", "params": []});

    let client = reqwest::Client::builder()
        .timeout(PROBE_TIMEOUT)
        .build()
        .map_err(|e| InspectError::Config(format!("failed to build HTTP client: {}", e)))?;

    let response = client
        .post(rpc_url)
        .json(&payload)
        .send()
        .await
        .map_err(classify_reqwest_error)?;

    let body: Value = response.json().await.map_err(classify_reqwest_error)?;
    body.get("result")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| InspectError::Rpc("eth_chainId response missing result".to_string()))
}

fn classify_reqwest_error(err: reqwest::Error) -> InspectError {
    if err.is_timeout() {
        InspectError::Timeout(format!("rpc probe timed out: {}", err))
    } else {
        InspectError::Rpc(format!("rpc probe failed: {}", err))
    }
}
