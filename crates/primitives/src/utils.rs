//! Misc utils

use ethers::types::{Address, H256, U256};

/// Left-pads the address to 32 bytes
pub fn address_to_h256(address: &Address) -> H256 {
    let mut buffer = [0u8; 32];
    buffer[12..].copy_from_slice(address.as_bytes());
    H256(buffer)
}

/// Interprets the address as `uint256` (EIP-712 encodes addresses of the transaction this way)
pub fn address_to_u256(address: &Address) -> U256 {
    U256::from_big_endian(address_to_h256(address).as_bytes())
}
