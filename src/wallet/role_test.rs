use super::*;
use crate::error::ContractError;
use crate::wallet::test_support::{FakeReader, account, addr};
use futures::executor::block_on;

const OWNER: u8 = 0x0a;
const ADMIN: u8 = 0x0b;
const OTHER: u8 = 0x0c;

// =============================================================
// classify
// =============================================================

#[test]
fn owner_wins_regardless_of_balance_or_admin() {
    let owner = addr(OWNER);
    assert_eq!(classify(owner, owner, owner, U256::ZERO), Role::Owner);
    assert_eq!(classify(owner, owner, addr(ADMIN), U256::from(10)), Role::Owner);
}

#[test]
fn admin_wins_over_balance() {
    assert_eq!(classify(addr(ADMIN), addr(OWNER), addr(ADMIN), U256::ZERO), Role::Admin);
    assert_eq!(classify(addr(ADMIN), addr(OWNER), addr(ADMIN), U256::from(3)), Role::Admin);
}

#[test]
fn balance_decides_member_or_guest() {
    assert_eq!(classify(addr(OTHER), addr(OWNER), addr(ADMIN), U256::from(1)), Role::Member);
    assert_eq!(classify(addr(OTHER), addr(OWNER), addr(ADMIN), U256::ZERO), Role::Guest);
}

// =============================================================
// resolve_role
// =============================================================

#[test]
fn owner_with_zero_balance_resolves_owner() {
    let reader = FakeReader::new(addr(OWNER), addr(ADMIN));
    assert_eq!(block_on(resolve_role(&reader, &account(OWNER))), Ok(Role::Owner));
    assert_eq!(reader.reads(), 3);
}

#[test]
fn holder_with_balance_resolves_member() {
    let reader = FakeReader::new(addr(OWNER), addr(ADMIN)).with_balance(addr(OTHER), 5);
    assert_eq!(block_on(resolve_role(&reader, &account(OTHER))), Ok(Role::Member));
}

#[test]
fn checksummed_account_matches_lowercase_owner() {
    let reader = FakeReader::new(addr(0xab), addr(ADMIN));
    let checksummed = addr(0xab).to_checksum(None);
    assert_eq!(block_on(resolve_role(&reader, &checksummed)), Ok(Role::Owner));
}

#[test]
fn read_failure_is_role_resolution_failure() {
    let reader = FakeReader::new(addr(OWNER), addr(ADMIN));
    reader.fail_with(ContractError::Transport("offline".to_owned()));
    assert_eq!(
        block_on(resolve_role(&reader, &account(OTHER))),
        Err(WalletError::RoleResolutionFailed("rpc transport failed: offline".to_owned()))
    );
}

#[test]
fn non_address_account_fails_without_reads() {
    let reader = FakeReader::new(addr(OWNER), addr(ADMIN));
    let result = block_on(resolve_role(&reader, "not-an-address"));
    assert!(matches!(result, Err(WalletError::RoleResolutionFailed(_))));
    assert_eq!(reader.reads(), 0);
}
