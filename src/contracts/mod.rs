//! Read-only access to the membership token and governance contracts.
//!
//! SYSTEM CONTEXT
//! ==============
//! `abi` encodes calldata and decodes return words, `rpc` moves them over
//! JSON-RPC `eth_call`. Role resolution only sees the [`ContractReader`]
//! trait, which tests replace with an in-memory fake.

pub mod abi;
pub mod rpc;

use alloy_primitives::{Address, U256};

use crate::error::ContractError;

/// The three contract reads role resolution needs. No transactions.
#[async_trait::async_trait(?Send)]
pub trait ContractReader {
    /// Token balance of `holder` on the membership token.
    async fn balance_of(&self, holder: Address) -> Result<U256, ContractError>;

    /// Governance contract owner.
    async fn owner(&self) -> Result<Address, ContractError>;

    /// Governance contract admin.
    async fn admin(&self) -> Result<Address, ContractError>;
}
