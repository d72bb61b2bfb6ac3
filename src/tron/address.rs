use crate::constants::{TRON_ADDRESS_PAYLOAD_LEN, TRON_ADDRESS_PREFIX};

use super::TronError;

/// Returns true when `address` is a well-formed base58check Tron address:
/// the decoded payload must carry a valid 4-byte double-SHA256 checksum,
/// be 21 bytes long and start with the mainnet prefix byte.
pub fn is_base58check_address(address: &str) -> bool {
    if address.is_empty() {
        return false;
    }
    match bs58::decode(address)
        .with_check(Some(TRON_ADDRESS_PREFIX))
        .into_vec()
    {
        Ok(payload) => payload.len() == TRON_ADDRESS_PAYLOAD_LEN,
        Err(_) => false,
    }
}

/// Structural validation only; the address comes back unchanged on the
/// success path, so callers keep whatever casing the client submitted.
pub fn validate_address(address: &str) -> Result<(), TronError> {
    if is_base58check_address(address) {
        Ok(())
    } else {
        Err(TronError::InvalidAddress)
    }
}
