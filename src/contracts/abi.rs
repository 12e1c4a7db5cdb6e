//! Minimal ABI encoding for the three view functions the header calls.

#[cfg(test)]
#[path = "abi_test.rs"]
mod abi_test;

use alloy_primitives::{Address, U256, hex};

use crate::error::ContractError;

/// `balanceOf(address)`
pub const BALANCE_OF_SELECTOR: [u8; 4] = [0x70, 0xa0, 0x82, 0x31];
/// `owner()`
pub const OWNER_SELECTOR: [u8; 4] = [0x8d, 0xa5, 0xcb, 0x5b];
/// `admin()`
pub const ADMIN_SELECTOR: [u8; 4] = [0xf8, 0x51, 0xa4, 0x40];

const WORD: usize = 32;

/// Calldata for `balanceOf(holder)` as a `0x`-prefixed hex string.
pub fn encode_balance_of(holder: Address) -> String {
    let mut data = Vec::with_capacity(4 + WORD);
    data.extend_from_slice(&BALANCE_OF_SELECTOR);
    data.extend_from_slice(&[0_u8; 12]);
    data.extend_from_slice(holder.as_slice());
    hex::encode_prefixed(data)
}

/// Calldata for an argument-less call.
pub fn encode_no_args(selector: [u8; 4]) -> String {
    hex::encode_prefixed(selector)
}

/// Decode a `0x`-prefixed hex return value into bytes.
///
/// # Errors
///
/// Returns [`ContractError::Malformed`] for invalid hex.
pub fn decode_hex(raw: &str) -> Result<Vec<u8>, ContractError> {
    let digits = raw.strip_prefix("0x").unwrap_or(raw);
    hex::decode(digits).map_err(|e| ContractError::Malformed(format!("invalid hex return data: {e}")))
}

/// First return word as `uint256`.
///
/// # Errors
///
/// Returns [`ContractError::Malformed`] if fewer than 32 bytes came back
/// (an empty result usually means the address has no code).
pub fn decode_uint(data: &[u8]) -> Result<U256, ContractError> {
    let word = first_word(data)?;
    Ok(U256::from_be_slice(word))
}

/// First return word as `address`; the 12 padding bytes must be zero.
///
/// # Errors
///
/// Returns [`ContractError::Malformed`] for short data or dirty padding.
pub fn decode_address(data: &[u8]) -> Result<Address, ContractError> {
    let word = first_word(data)?;
    if word[..12].iter().any(|b| *b != 0) {
        return Err(ContractError::Malformed("address word has non-zero padding".to_owned()));
    }
    Ok(Address::from_slice(&word[12..]))
}

fn first_word(data: &[u8]) -> Result<&[u8], ContractError> {
    data.get(..WORD)
        .ok_or_else(|| ContractError::Malformed(format!("expected {WORD} bytes, got {}", data.len())))
}
