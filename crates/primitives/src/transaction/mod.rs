//! Account abstraction transactions (EIP-712, type 113)
//!
//! A transaction is built field by field. The fee fields have to be final before the signing
//! digest is computed, and the signature has to be attached before the transaction is
//! serialized.

mod eip712;
mod request;
mod serialize;

use crate::{
    bytecode::BytecodeError,
    constants::eip712::{DEFAULT_GAS_PER_PUBDATA_LIMIT, EIP712_TX_TYPE},
};
use ethers::types::{Address, Bytes, H256, U256};
pub use request::{Eip712CallRequest, Eip712MetaRequest, PaymasterParamsRequest};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors while signing or serializing a transaction
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransactionError {
    /// Field required for signing/serializing isn't set
    #[error("transaction field {0} is not set")]
    MissingField(&'static str),

    /// Custom signature is set but empty
    #[error("empty signatures are not supported")]
    EmptySignature,

    /// One of the factory dependencies can't be hashed
    #[error(transparent)]
    Bytecode(#[from] BytecodeError),
}

/// Paymaster that sponsors the transaction fee
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymasterParams {
    /// Address of the paymaster
    pub paymaster: Address,
    /// Input passed to the paymaster
    pub paymaster_input: Bytes,
}

/// Rollup specific fields of the transaction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Eip712Meta {
    /// Maximum gas the sender is willing to pay per byte of pubdata
    pub gas_per_pubdata: U256,
    /// Bytecodes which have to be known before the transaction executes (deployments)
    pub factory_deps: Vec<Bytes>,
    /// Signature verified by the sender account
    pub custom_signature: Option<Bytes>,
    /// Fee sponsorship
    pub paymaster_params: Option<PaymasterParams>,
}

impl Default for Eip712Meta {
    fn default() -> Self {
        Self {
            gas_per_pubdata: U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT),
            factory_deps: vec![],
            custom_signature: None,
            paymaster_params: None,
        }
    }
}

/// Transaction request of type 113
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Eip712TransactionRequest {
    /// Sender (an account contract or an externally owned account)
    pub from: Option<Address>,
    /// Recipient
    pub to: Option<Address>,
    /// Transferred value
    pub value: U256,
    /// Call data
    pub data: Bytes,
    /// Nonce of the sender
    pub nonce: U256,
    /// Chain id
    pub chain_id: Option<u64>,
    /// Gas limit (estimated by the node when not set)
    pub gas_limit: Option<U256>,
    /// Gas price, used as max fee per gas when the latter isn't set
    pub gas_price: Option<U256>,
    /// Max fee per gas
    pub max_fee_per_gas: Option<U256>,
    /// Max priority fee per gas
    pub max_priority_fee_per_gas: Option<U256>,
    /// Rollup specific fields
    pub custom_data: Eip712Meta,
}

impl Eip712TransactionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Type discriminator of the transaction
    pub fn transaction_type(&self) -> u8 {
        EIP712_TX_TYPE
    }

    /// Effective max fee per gas (falls back to the gas price)
    pub fn effective_max_fee_per_gas(&self) -> U256 {
        self.max_fee_per_gas.or(self.gas_price).unwrap_or_default()
    }

    /// Effective max priority fee per gas (falls back to the max fee per gas)
    pub fn effective_max_priority_fee_per_gas(&self) -> U256 {
        self.max_priority_fee_per_gas.unwrap_or_else(|| self.effective_max_fee_per_gas())
    }

    /// Digest that is signed by the sender (EIP-712 typed data hash)
    pub fn signed_digest(&self) -> Result<H256, TransactionError> {
        Ok(eip712::encode(self)?.into())
    }

    /// Serializes the transaction into the raw bytes accepted by `eth_sendRawTransaction`
    pub fn serialize(&self) -> Result<Bytes, TransactionError> {
        serialize::rlp_encode(self)
    }

    /// JSON representation accepted by `eth_estimateGas` and `eth_call`
    pub fn call_request(&self) -> Eip712CallRequest {
        Eip712CallRequest::from(self)
    }

    // Builder pattern helpers

    /// Sets the sender of the transaction
    pub fn from(mut self, from: Address) -> Self {
        self.from = Some(from);
        self
    }

    /// Sets the recipient of the transaction
    pub fn to(mut self, to: Address) -> Self {
        self.to = Some(to);
        self
    }

    /// Sets the transferred value
    pub fn value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Sets the call data
    pub fn data(mut self, data: Bytes) -> Self {
        self.data = data;
        self
    }

    /// Sets the nonce
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    /// Sets the chain id
    pub fn chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = Some(chain_id);
        self
    }

    /// Sets the gas limit
    pub fn gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }

    /// Sets the gas price
    pub fn gas_price(mut self, gas_price: U256) -> Self {
        self.gas_price = Some(gas_price);
        self
    }

    /// Sets the max fee per gas
    pub fn max_fee_per_gas(mut self, max_fee_per_gas: U256) -> Self {
        self.max_fee_per_gas = Some(max_fee_per_gas);
        self
    }

    /// Sets the max priority fee per gas
    pub fn max_priority_fee_per_gas(mut self, max_priority_fee_per_gas: U256) -> Self {
        self.max_priority_fee_per_gas = Some(max_priority_fee_per_gas);
        self
    }

    /// Sets the gas per pubdata limit
    pub fn gas_per_pubdata(mut self, gas_per_pubdata: U256) -> Self {
        self.custom_data.gas_per_pubdata = gas_per_pubdata;
        self
    }

    /// Sets the factory dependencies
    pub fn factory_deps(mut self, factory_deps: Vec<Bytes>) -> Self {
        self.custom_data.factory_deps = factory_deps;
        self
    }

    /// Sets the custom signature
    pub fn custom_signature(mut self, signature: Bytes) -> Self {
        self.custom_data.custom_signature = Some(signature);
        self
    }

    /// Sets the paymaster
    pub fn paymaster_params(mut self, paymaster_params: PaymasterParams) -> Self {
        self.custom_data.paymaster_params = Some(paymaster_params);
        self
    }
}
