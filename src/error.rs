//! Error taxonomy for wallet, provider, and contract-read failures.
//!
//! ERROR HANDLING
//! ==============
//! Only `NoWalletDetected` and `WalletConnectFailed` reach the user as
//! blocking notices. Chain-switch failures are logged and absorbed, and role
//! resolution failures degrade the session to GUEST.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// EIP-1193 code for a request the user rejected.
pub const USER_REJECTED: i64 = 4001;

/// EIP-3326 code for a chain the wallet does not know yet.
pub const UNRECOGNIZED_CHAIN: i64 = 4902;

pub const NO_WALLET_NOTICE: &str = "No wallet detected. Please install a wallet extension like MetaMask.";
pub const CONNECT_FAILED_NOTICE: &str = "Failed to connect wallet. Please try again.";

/// Error object returned by an injected wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("provider error ({}): {message}", code_label(.code))]
pub struct ProviderError {
    pub code: Option<i64>,
    pub message: String,
}

#[allow(clippy::ref_option)]
fn code_label(code: &Option<i64>) -> String {
    code.map_or_else(|| "no code".to_owned(), |code| code.to_string())
}

impl ProviderError {
    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code: Some(code), message: message.into() }
    }

    pub fn uncoded(message: impl Into<String>) -> Self {
        Self { code: None, message: message.into() }
    }

    /// The wallet has no entry for the requested chain and needs an add-chain request.
    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Some(UNRECOGNIZED_CHAIN)
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == Some(USER_REJECTED)
    }
}

/// Failures while reading contract state over JSON-RPC.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContractError {
    #[error("rpc transport failed: {0}")]
    Transport(String),

    #[error("rpc status {0}")]
    Status(u16),

    #[error("rpc error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("malformed rpc response: {0}")]
    Malformed(String),

    /// Contract reads need a browser; server and test builds never reach the network.
    #[error("contract reads are not available in this build")]
    Unavailable,
}

/// Errors surfaced by the wallet session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("no wallet provider injected")]
    NoWalletDetected,

    #[error("chain switch failed: {0}")]
    ChainSwitchFailed(ProviderError),

    #[error("wallet connect failed: {0}")]
    WalletConnectFailed(ProviderError),

    #[error("role resolution failed: {0}")]
    RoleResolutionFailed(String),

    #[error("a wallet connect request is already in flight")]
    ConnectInProgress,
}

impl From<ContractError> for WalletError {
    fn from(err: ContractError) -> Self {
        Self::RoleResolutionFailed(err.to_string())
    }
}

impl WalletError {
    /// Message for a blocking user notice, or `None` when the error is only logged.
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Self::NoWalletDetected => Some(NO_WALLET_NOTICE),
            Self::WalletConnectFailed(_) => Some(CONNECT_FAILED_NOTICE),
            Self::ChainSwitchFailed(_) | Self::RoleResolutionFailed(_) | Self::ConnectInProgress => None,
        }
    }

    /// Whether clicking "Connect Wallet" again can succeed without user setup.
    pub fn retryable(&self) -> bool {
        matches!(self, Self::WalletConnectFailed(_) | Self::ConnectInProgress)
    }
}
