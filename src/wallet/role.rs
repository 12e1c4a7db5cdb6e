//! Role resolution from on-chain ownership, admin rights, and token balance.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use alloy_primitives::{Address, U256};

use crate::contracts::ContractReader;
use crate::error::WalletError;
use crate::state::session::Role;

/// Precedence: owner, then admin, then any token balance. Privilege tiers
/// beat token holdings even when the owner or admin holds nothing.
pub fn classify(account: Address, owner: Address, admin: Address, balance: U256) -> Role {
    if account == owner {
        Role::Owner
    } else if account == admin {
        Role::Admin
    } else if balance > U256::ZERO {
        Role::Member
    } else {
        Role::Guest
    }
}

/// Read balance, owner, and admin for `account` and classify it.
///
/// # Errors
///
/// Returns [`WalletError::RoleResolutionFailed`] when `account` is not an
/// address or any of the three reads fails.
pub async fn resolve_role<R>(reader: &R, account: &str) -> Result<Role, WalletError>
where
    R: ContractReader,
{
    let address: Address = account
        .trim()
        .parse()
        .map_err(|_| WalletError::RoleResolutionFailed(format!("not an address: {account}")))?;
    let (balance, owner, admin) = futures::try_join!(reader.balance_of(address), reader.owner(), reader.admin())?;
    Ok(classify(address, owner, admin, balance))
}
