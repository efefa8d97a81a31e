use ethers::{
    abi::AbiDecode,
    contract::ContractError,
    providers::{JsonRpcError, Middleware, MiddlewareError, ProviderError},
    types::{Address, Bytes, H256},
};
use regex::Regex;
use std::str::FromStr;
use thiserror::Error;
use zkaa_primitives::{BytecodeError, TransactionError};

/// Errors while talking to the node or deploying contracts
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Provider error
    #[error("provider error: {inner}")]
    Provider {
        /// The inner error message
        inner: String,
    },

    /// Wallet (signing) error
    #[error("wallet error: {inner}")]
    Wallet {
        /// The inner error message
        inner: String,
    },

    /// Transaction was included, but its execution failed
    #[error("transaction {tx_hash:?} reverted: {}", .reason.as_deref().unwrap_or("unknown reason"))]
    Reverted {
        /// Hash of the failed transaction
        tx_hash: H256,
        /// Decoded revert reason (if available)
        reason: Option<String>,
    },

    /// execution reverted (while estimating or calling)
    #[error("execution reverted: {0}")]
    ExecutionReverted(String),

    /// Transaction was dropped before it got a receipt
    #[error("transaction {0:?} dropped from the mempool")]
    Dropped(H256),

    /// Contract deployer didn't emit a deployment event for the deployer
    #[error("no contract deployed by {deployer:?} in transaction {tx_hash:?}")]
    NoDeployment {
        /// Deployer address
        deployer: Address,
        /// Hash of the deployment transaction
        tx_hash: H256,
    },

    /// Artifact with the given name isn't loaded
    #[error("artifact {0} not found")]
    ArtifactNotFound(String),

    /// Artifact can't be read or parsed
    #[error("artifact error: {inner}")]
    Artifact {
        /// The inner error message
        inner: String,
    },

    /// ABI error
    #[error("abi error: {inner}")]
    Abi {
        /// The inner error message
        inner: String,
    },

    /// Transaction can't be signed or serialized
    #[error(transparent)]
    Transaction(#[from] TransactionError),

    /// Invalid bytecode
    #[error(transparent)]
    Bytecode(#[from] BytecodeError),
}

impl ClientError {
    pub fn from_provider_error(err: &ProviderError) -> Self {
        match err {
            ProviderError::JsonRpcClientError(err) => err
                .as_error_response()
                .map(Self::from_json_rpc_error)
                .unwrap_or(ClientError::Provider {
                    inner: format!("unknown json-rpc client error: {err:?}"),
                }),
            ProviderError::HTTPError(err) => {
                ClientError::Provider { inner: format!("HTTP error: {err:?}") }
            }
            _ => ClientError::Provider { inner: format!("unknown provider error: {err:?}") },
        }
    }

    pub fn from_json_rpc_error(err: &JsonRpcError) -> Self {
        if let Some(serde_json::Value::String(data)) = err.data.as_ref() {
            let re = Regex::new(r"0x[0-9a-fA-F]+").expect("Regex rules valid");
            if let Some(reason) = re
                .find(data)
                .and_then(|hex| Bytes::from_str(hex.as_str()).ok())
                .and_then(decode_revert_string)
            {
                return Self::ExecutionReverted(reason);
            }
        }

        if let Some(reason) = err.message.strip_prefix("execution reverted") {
            return Self::ExecutionReverted(
                reason.trim_start_matches(':').trim().to_string(),
            );
        }

        Self::Provider { inner: format!("json-rpc error {}: {}", err.code, err.message) }
    }

    pub fn from_middleware_error<M: Middleware>(err: M::Error) -> Self {
        if let Some(err) = err.as_error_response() {
            return Self::from_json_rpc_error(err);
        }

        if let Some(err) = err.as_provider_error() {
            return Self::from_provider_error(err);
        }

        Self::Provider { inner: format!("middleware error: {err:?}") }
    }

    pub fn from_contract_error<M: Middleware>(err: ContractError<M>) -> Self {
        match err {
            ContractError::Revert(data) => Self::ExecutionReverted(
                decode_revert_string(data.clone()).unwrap_or_else(|| format!("{data}")),
            ),
            ContractError::MiddlewareError { e } => Self::from_middleware_error::<M>(e),
            ContractError::ProviderError { e } => Self::from_provider_error(&e),
            ContractError::AbiError(e) => Self::Abi { inner: e.to_string() },
            ContractError::DecodingError(e) => Self::Abi { inner: e.to_string() },
            _ => Self::Provider { inner: err.to_string() },
        }
    }
}

// `require(cond, "reason")` and `revert("reason")` end up as `Error(string)` with selector
// `0x08c379a0`
pub fn decode_revert_string(data: Bytes) -> Option<String> {
    if data.len() < 4 {
        return None;
    }

    let (error_sig, reason) = data.split_at(4);
    if error_sig == [0x08, 0xc3, 0x79, 0xa0] {
        <String as AbiDecode>::decode(reason).ok()
    } else {
        None
    }
}
