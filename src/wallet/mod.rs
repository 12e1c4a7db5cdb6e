//! Wallet provider seam and the session logic built on it.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` orchestrates connect/subscribe/role resolution against the
//! [`WalletProvider`] trait. `browser` binds that trait to the injected
//! `window.ethereum` object, and `handle` wires a browser session into the
//! Leptos tree.

pub mod chain;
pub mod handle;
pub mod role;
pub mod session;

#[cfg(feature = "hydrate")]
pub mod browser;

#[cfg(test)]
pub(crate) mod test_support;

use std::rc::Rc;

use crate::config::ChainSpec;
use crate::error::ProviderError;

pub const ACCOUNTS_CHANGED: &str = "accountsChanged";
pub const CHAIN_CHANGED: &str = "chainChanged";

/// Provider events the session reacts to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProviderEvent {
    /// New account list; empty when the user disconnected every account.
    AccountsChanged(Vec<String>),
    /// Hex chain id the wallet switched to.
    ChainChanged(String),
}

/// Callback a provider subscription pushes events into.
pub type EventSink = Rc<dyn Fn(ProviderEvent)>;

/// EIP-1193 operations the header uses.
#[async_trait::async_trait(?Send)]
pub trait WalletProvider {
    /// Handle keeping the event listeners alive; dropping it removes them.
    type Subscription;

    /// Whether a provider object is injected into the page.
    fn is_present(&self) -> bool;

    /// `wallet_switchEthereumChain`.
    async fn switch_chain(&self, chain_id: u64) -> Result<(), ProviderError>;

    /// `wallet_addEthereumChain`.
    async fn add_chain(&self, chain: &ChainSpec) -> Result<(), ProviderError>;

    /// `eth_requestAccounts`; prompts the user to authorize the page.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Register `accountsChanged` and `chainChanged` listeners.
    ///
    /// # Errors
    ///
    /// Returns a [`ProviderError`] if the provider has no event API.
    fn subscribe(&self, sink: EventSink) -> Result<Self::Subscription, ProviderError>;
}
