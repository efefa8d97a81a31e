//! zkSync account abstraction primitive types
//!
//! This crate contains the transaction envelope (type 113), address derivation, bytecode
//! hashing, wallets and network settings used to deploy and drive account abstraction
//! contracts.

pub mod address;
pub mod bytecode;
pub mod constants;
pub mod network;
pub mod provider;
mod salt;
pub mod transaction;
mod utils;
mod wallet;

pub use address::{create2_address, encode_owner};
pub use bytecode::{hash_bytecode, BytecodeError};
pub use network::{Network, NetworkConfig};
pub use salt::Salt;
pub use transaction::{
    Eip712CallRequest, Eip712Meta, Eip712TransactionRequest, PaymasterParams, TransactionError,
};
pub use utils::{address_to_h256, address_to_u256};
pub use wallet::Wallet;
