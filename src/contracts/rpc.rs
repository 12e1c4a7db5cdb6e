//! JSON-RPC `eth_call` transport for contract reads.
//!
//! Client-side (hydrate): real HTTP POSTs via `gloo-net`.
//! Server-side (SSR) and tests: reads fail with `ContractError::Unavailable`.
//!
//! ERROR HANDLING
//! ==============
//! Transport, HTTP status, JSON-RPC error objects, and undecodable results
//! each map to their own `ContractError` variant so the warning logged by
//! role resolution says which layer failed.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rpc_test.rs"]
mod rpc_test;

use std::cell::Cell;

use alloy_primitives::{Address, U256};
use serde::Deserialize;

use super::ContractReader;
use super::abi::{
    ADMIN_SELECTOR, OWNER_SELECTOR, decode_address, decode_hex, decode_uint, encode_balance_of, encode_no_args,
};
use crate::config::ContractAddresses;
use crate::error::ContractError;

#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    error: Option<RpcErrorObject>,
}

#[derive(Debug, Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

/// Build an `eth_call` request body against the latest block.
pub fn call_request(id: u64, to: Address, data: &str) -> serde_json::Value {
    serde_json::json!({
        "jsonrpc": "2.0",
        "id": id,
        "method": "eth_call",
        "params": [{ "to": to.to_string(), "data": data }, "latest"],
    })
}

/// Extract the hex `result` from a JSON-RPC response body.
///
/// # Errors
///
/// Returns [`ContractError::Rpc`] for an error object and
/// [`ContractError::Malformed`] when neither field is usable.
pub fn parse_call_response(body: &str) -> Result<String, ContractError> {
    let resp: RpcResponse =
        serde_json::from_str(body).map_err(|e| ContractError::Malformed(format!("invalid json-rpc body: {e}")))?;
    if let Some(err) = resp.error {
        return Err(ContractError::Rpc { code: err.code, message: err.message });
    }
    resp.result
        .ok_or_else(|| ContractError::Malformed("json-rpc response has no result".to_owned()))
}

/// [`ContractReader`] backed by a JSON-RPC endpoint.
#[derive(Debug)]
pub struct JsonRpcReader {
    rpc_url: String,
    contracts: ContractAddresses,
    next_id: Cell<u64>,
}

impl JsonRpcReader {
    pub fn new(rpc_url: impl Into<String>, contracts: ContractAddresses) -> Self {
        Self { rpc_url: rpc_url.into(), contracts, next_id: Cell::new(1) }
    }

    pub fn rpc_url(&self) -> &str {
        &self.rpc_url
    }

    fn take_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id.wrapping_add(1));
        id
    }

    async fn eth_call(&self, to: Address, data: String) -> Result<Vec<u8>, ContractError> {
        let body = call_request(self.take_id(), to, &data);
        let result = self.post(&body).await?;
        decode_hex(&result)
    }

    async fn post(&self, body: &serde_json::Value) -> Result<String, ContractError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.rpc_url)
                .json(body)
                .map_err(|e| ContractError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ContractError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ContractError::Status(resp.status()));
            }
            let text = resp.text().await.map_err(|e| ContractError::Transport(e.to_string()))?;
            parse_call_response(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = body;
            Err(ContractError::Unavailable)
        }
    }
}

#[async_trait::async_trait(?Send)]
impl ContractReader for JsonRpcReader {
    async fn balance_of(&self, holder: Address) -> Result<U256, ContractError> {
        let data = self.eth_call(self.contracts.token, encode_balance_of(holder)).await?;
        decode_uint(&data)
    }

    async fn owner(&self) -> Result<Address, ContractError> {
        let data = self.eth_call(self.contracts.governance, encode_no_args(OWNER_SELECTOR)).await?;
        decode_address(&data)
    }

    async fn admin(&self) -> Result<Address, ContractError> {
        let data = self.eth_call(self.contracts.governance, encode_no_args(ADMIN_SELECTOR)).await?;
        decode_address(&data)
    }
}
