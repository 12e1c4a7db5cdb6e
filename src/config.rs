//! Chain and contract configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The header targets exactly one chain. Values come from `DAO_*` variables
//! captured by `option_env!` when the WASM bundle is built, so a deployment
//! can retarget the chain or contracts without code changes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use alloy_primitives::Address;

pub const DEFAULT_CHAIN_ID: u64 = 1_666_600_000;
pub const DEFAULT_CHAIN_NAME: &str = "Harmony Mainnet";
pub const DEFAULT_RPC_URL: &str = "https://api.harmony.one";
pub const DEFAULT_EXPLORER_URL: &str = "https://explorer.harmony.one/";

/// Errors produced while building [`AppConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config value: {var} not set")]
    Missing { var: &'static str },

    #[error("invalid config value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Native currency descriptor used by `wallet_addEthereumChain`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NativeCurrency {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
}

/// Static description of the single supported chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainSpec {
    pub chain_id: u64,
    pub chain_name: String,
    pub rpc_urls: Vec<String>,
    pub native_currency: NativeCurrency,
    pub block_explorer_urls: Vec<String>,
}

impl Default for ChainSpec {
    fn default() -> Self {
        Self {
            chain_id: DEFAULT_CHAIN_ID,
            chain_name: DEFAULT_CHAIN_NAME.to_owned(),
            rpc_urls: vec![DEFAULT_RPC_URL.to_owned()],
            native_currency: NativeCurrency { name: "ONE".to_owned(), symbol: "ONE".to_owned(), decimals: 18 },
            block_explorer_urls: vec![DEFAULT_EXPLORER_URL.to_owned()],
        }
    }
}

/// Addresses of the two contracts read during role resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContractAddresses {
    /// Membership token; `balanceOf` decides MEMBER vs GUEST.
    pub token: Address,
    /// Governance contract exposing `owner()` and `admin()`.
    pub governance: Address,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub chain: ChainSpec,
    /// Endpoint for read-only `eth_call`s, independent of the wallet's RPC.
    pub rpc_url: String,
    pub contracts: ContractAddresses,
}

impl Default for AppConfig {
    /// Harmony Mainnet with unset contract addresses.
    fn default() -> Self {
        Self {
            chain: ChainSpec::default(),
            rpc_url: DEFAULT_RPC_URL.to_owned(),
            contracts: ContractAddresses::default(),
        }
    }
}

impl AppConfig {
    /// Build typed config from a key lookup.
    ///
    /// Required:
    /// - `DAO_TOKEN_ADDRESS`
    /// - `DAO_GOVERNANCE_ADDRESS`
    ///
    /// Optional:
    /// - `DAO_CHAIN_ID`: default 1666600000 (Harmony Mainnet)
    /// - `DAO_CHAIN_NAME`
    /// - `DAO_RPC_URL`: used for both the add-chain request and contract reads
    /// - `DAO_EXPLORER_URL`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when a required address is missing or any
    /// value fails to parse.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let mut chain = ChainSpec::default();
        if let Some(raw) = lookup("DAO_CHAIN_ID") {
            chain.chain_id = parse_chain_id(&raw).ok_or(ConfigError::Invalid { var: "DAO_CHAIN_ID", value: raw })?;
        }
        if let Some(name) = lookup("DAO_CHAIN_NAME") {
            chain.chain_name = name;
        }
        let rpc_url = lookup("DAO_RPC_URL").unwrap_or_else(|| DEFAULT_RPC_URL.to_owned());
        chain.rpc_urls = vec![rpc_url.clone()];
        if let Some(explorer) = lookup("DAO_EXPLORER_URL") {
            chain.block_explorer_urls = vec![explorer];
        }

        let contracts = ContractAddresses {
            token: required_address(&lookup, "DAO_TOKEN_ADDRESS")?,
            governance: required_address(&lookup, "DAO_GOVERNANCE_ADDRESS")?,
        };

        Ok(Self { chain, rpc_url, contracts })
    }

    /// Build config from values captured at compile time.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_lookup`].
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| {
            let value = match var {
                "DAO_CHAIN_ID" => option_env!("DAO_CHAIN_ID"),
                "DAO_CHAIN_NAME" => option_env!("DAO_CHAIN_NAME"),
                "DAO_RPC_URL" => option_env!("DAO_RPC_URL"),
                "DAO_EXPLORER_URL" => option_env!("DAO_EXPLORER_URL"),
                "DAO_TOKEN_ADDRESS" => option_env!("DAO_TOKEN_ADDRESS"),
                "DAO_GOVERNANCE_ADDRESS" => option_env!("DAO_GOVERNANCE_ADDRESS"),
                _ => None,
            };
            value.map(str::to_owned)
        })
    }
}

/// Accepts decimal (`1666600000`) or `0x`-prefixed hex (`0x63564c40`).
pub fn parse_chain_id(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

fn required_address<F>(lookup: &F, var: &'static str) -> Result<Address, ConfigError>
where
    F: Fn(&'static str) -> Option<String>,
{
    let raw = lookup(var).ok_or(ConfigError::Missing { var })?;
    raw.trim().parse::<Address>().map_err(|_| ConfigError::Invalid { var, value: raw })
}
