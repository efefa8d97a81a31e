//! Versioned bytecode hashes
//!
//! The rollup does not store bytecode under its keccak256 hash. Every deployed bytecode is
//! identified by a versioned sha256 based hash which also encodes the length of the bytecode.

use crate::constants::bytecode::{BYTECODE_HASH_VERSION, MAX_WORDS, WORD_SIZE};
use ethers::types::H256;
use sha2::{Digest, Sha256};
use thiserror::Error;

/// Bytecode that can't be hashed (and therefore can't be deployed)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BytecodeError {
    /// Length in bytes is not a multiple of the word size
    #[error("bytecode length in bytes must be divisible by 32, got {0}")]
    Length(usize),

    /// Number of words doesn't fit into two bytes
    #[error("bytecode is too long: {0} words")]
    TooLong(usize),

    /// Number of words is even
    #[error("bytecode length in 32-byte words must be odd, got {0}")]
    EvenWordCount(usize),
}

/// Computes the versioned hash of the bytecode.
///
/// Layout: `version (1 byte) | 0 (1 byte) | length in words (2 bytes, BE) | sha256[4..]`
pub fn hash_bytecode(bytecode: &[u8]) -> Result<H256, BytecodeError> {
    if bytecode.len() % WORD_SIZE != 0 {
        return Err(BytecodeError::Length(bytecode.len()));
    }

    let words = bytecode.len() / WORD_SIZE;
    if words > MAX_WORDS {
        return Err(BytecodeError::TooLong(words));
    }
    if words % 2 == 0 {
        return Err(BytecodeError::EvenWordCount(words));
    }

    let digest = Sha256::digest(bytecode);

    let mut hash = [0u8; 32];
    hash[0] = BYTECODE_HASH_VERSION;
    hash[2..4].copy_from_slice(&(words as u16).to_be_bytes());
    hash[4..].copy_from_slice(&digest[4..]);

    Ok(H256(hash))
}
