//! Deterministic (CREATE2-style) address derivation

use crate::{constants::create2::CREATE2_PREFIX_PREIMAGE, utils::address_to_h256, Salt};
use ethers::{
    abi::{encode, Token},
    types::{Address, Bytes, H256},
    utils::keccak256,
};
use lazy_static::lazy_static;

lazy_static! {
    static ref CREATE2_PREFIX: [u8; 32] = keccak256(CREATE2_PREFIX_PREIMAGE);
}

/// Computes the address of a contract deployed with `create2` by `sender`.
///
/// `keccak256(prefix | pad32(sender) | bytecode_hash | salt | keccak256(input))[12..]`
///
/// # Arguments
/// * `sender` - The deploying contract (e.g. the account factory)
/// * `bytecode_hash` - The versioned hash of the deployed bytecode
/// * `salt` - The salt passed to `create2`
/// * `input` - ABI encoded constructor arguments
pub fn create2_address(sender: Address, bytecode_hash: H256, salt: Salt, input: &[u8]) -> Address {
    let preimage = [
        CREATE2_PREFIX.as_slice(),
        address_to_h256(&sender).as_bytes(),
        bytecode_hash.as_bytes(),
        salt.as_bytes(),
        &keccak256(input),
    ]
    .concat();

    Address::from_slice(&keccak256(preimage)[12..])
}

/// ABI encodes the owner address (constructor input of the account contract)
pub fn encode_owner(owner: Address) -> Bytes {
    encode(&[Token::Address(owner)]).into()
}
