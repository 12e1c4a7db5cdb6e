//! Target-chain enforcement and EIP-3085/EIP-3326 request params.
//!
//! TRADE-OFFS
//! ==========
//! Chain switching is best effort. A wallet on the wrong chain can still
//! connect and show its role, because role reads go through our own RPC
//! endpoint rather than the wallet's.

#[cfg(test)]
#[path = "chain_test.rs"]
mod chain_test;

use serde::Serialize;

use super::WalletProvider;
use crate::config::{ChainSpec, parse_chain_id};
use crate::error::WalletError;

/// How the wallet ended up on the target chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainSwitch {
    Switched,
    /// The wallet did not know the chain; it was added, then switched to.
    AddedThenSwitched,
}

/// `0x`-prefixed lowercase hex, the form wallets expect for chain ids.
pub fn chain_id_hex(chain_id: u64) -> String {
    format!("{chain_id:#x}")
}

/// Whether a `chainChanged` payload names `target`.
pub fn is_target_chain(reported: &str, target: u64) -> bool {
    parse_chain_id(reported) == Some(target)
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SwitchChainParams {
    chain_id: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AddChainParams<'a> {
    chain_id: String,
    chain_name: &'a str,
    rpc_urls: &'a [String],
    native_currency: CurrencyParams<'a>,
    block_explorer_urls: &'a [String],
}

#[derive(Serialize)]
struct CurrencyParams<'a> {
    name: &'a str,
    symbol: &'a str,
    decimals: u8,
}

/// Params array for `wallet_switchEthereumChain`.
pub fn switch_chain_params(chain_id: u64) -> serde_json::Value {
    let params = SwitchChainParams { chain_id: chain_id_hex(chain_id) };
    serde_json::json!([params])
}

/// Params array for `wallet_addEthereumChain`.
pub fn add_chain_params(chain: &ChainSpec) -> serde_json::Value {
    let params = AddChainParams {
        chain_id: chain_id_hex(chain.chain_id),
        chain_name: &chain.chain_name,
        rpc_urls: &chain.rpc_urls,
        native_currency: CurrencyParams {
            name: &chain.native_currency.name,
            symbol: &chain.native_currency.symbol,
            decimals: chain.native_currency.decimals,
        },
        block_explorer_urls: &chain.block_explorer_urls,
    };
    serde_json::json!([params])
}

/// Ask the wallet to switch to `chain`, adding it first if the wallet reports
/// it as unrecognized. The switch is retried exactly once after an add.
///
/// # Errors
///
/// Returns [`WalletError::ChainSwitchFailed`] with the last provider error.
/// Callers log it and continue.
pub async fn ensure_target_chain<P>(provider: &P, chain: &ChainSpec) -> Result<ChainSwitch, WalletError>
where
    P: WalletProvider,
{
    let err = match provider.switch_chain(chain.chain_id).await {
        Ok(()) => return Ok(ChainSwitch::Switched),
        Err(err) => err,
    };
    if !err.is_unrecognized_chain() {
        return Err(WalletError::ChainSwitchFailed(err));
    }

    leptos::logging::log!("chain {} unknown to wallet; adding {}", chain_id_hex(chain.chain_id), chain.chain_name);
    provider.add_chain(chain).await.map_err(WalletError::ChainSwitchFailed)?;
    provider
        .switch_chain(chain.chain_id)
        .await
        .map_err(WalletError::ChainSwitchFailed)?;
    Ok(ChainSwitch::AddedThenSwitched)
}
