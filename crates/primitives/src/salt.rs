use ethers::{types::H256, utils::keccak256};
use serde::{Deserialize, Serialize};
use std::{fmt, ops::Deref};

/// 32-byte salt that makes factory derived addresses unique
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Salt(pub H256);

impl Salt {
    /// Salt from an arbitrary label (keccak256 of its UTF-8 bytes)
    pub fn from_label(label: &str) -> Self {
        Self(keccak256(label.as_bytes()).into())
    }

    /// All zero salt
    pub fn zero() -> Self {
        Self(H256::zero())
    }

    pub fn to_fixed_bytes(self) -> [u8; 32] {
        self.0.to_fixed_bytes()
    }
}

impl From<H256> for Salt {
    fn from(value: H256) -> Self {
        Self(value)
    }
}

impl Deref for Salt {
    type Target = H256;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}
