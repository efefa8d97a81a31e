use crate::error::ClientError;
use ethers::{
    providers::{JsonRpcClient, Middleware, PendingTransaction},
    types::{Address, Bytes, TransactionReceipt, TransactionRequest, U256, U64},
};
use std::sync::Arc;
use tracing::{debug, info};
use zkaa_primitives::Eip712TransactionRequest;

/// Rollup node client
///
/// Thin wrapper around an ethers middleware with the rollup specific calls (estimation of
/// type 113 transactions) and receipt checks.
#[derive(Debug)]
pub struct ZkClient<M: Middleware + 'static> {
    eth_client: Arc<M>,
}

impl<M: Middleware + 'static> Clone for ZkClient<M> {
    fn clone(&self) -> Self {
        Self { eth_client: self.eth_client.clone() }
    }
}

impl<M: Middleware + 'static> ZkClient<M> {
    pub fn new(eth_client: Arc<M>) -> Self {
        Self { eth_client }
    }

    pub fn eth_client(&self) -> Arc<M> {
        self.eth_client.clone()
    }

    pub async fn chain_id(&self) -> Result<u64, ClientError> {
        let chain_id = self
            .eth_client
            .get_chainid()
            .await
            .map_err(ClientError::from_middleware_error::<M>)?;
        Ok(chain_id.as_u64())
    }

    pub async fn balance(&self, address: Address) -> Result<U256, ClientError> {
        self.eth_client
            .get_balance(address, None)
            .await
            .map_err(ClientError::from_middleware_error::<M>)
    }

    /// Transaction count of the address (next nonce)
    pub async fn nonce(&self, address: Address) -> Result<U256, ClientError> {
        self.eth_client
            .get_transaction_count(address, None)
            .await
            .map_err(ClientError::from_middleware_error::<M>)
    }

    pub async fn gas_price(&self) -> Result<U256, ClientError> {
        self.eth_client.get_gas_price().await.map_err(ClientError::from_middleware_error::<M>)
    }

    /// Estimates gas of the type 113 transaction (`eth_estimateGas` with `eip712Meta`)
    pub async fn estimate_gas(&self, tx: &Eip712TransactionRequest) -> Result<U256, ClientError> {
        let gas = self
            .eth_client
            .provider()
            .request::<_, U256>("eth_estimateGas", [tx.call_request()])
            .await
            .map_err(|err| ClientError::from_provider_error(&err))?;
        debug!("Estimated gas {gas} for transaction from {:?}", tx.from);
        Ok(gas)
    }

    /// Submits the serialized transaction and waits for the receipt
    pub async fn send_raw_transaction(
        &self,
        raw: Bytes,
    ) -> Result<TransactionReceipt, ClientError> {
        let pending = self
            .eth_client
            .send_raw_transaction(raw)
            .await
            .map_err(ClientError::from_middleware_error::<M>)?;
        confirm(pending).await
    }

    /// Transfers value from the account of the signing middleware
    pub async fn transfer(
        &self,
        to: Address,
        value: U256,
    ) -> Result<TransactionReceipt, ClientError> {
        let tx = TransactionRequest::new().to(to).value(value);
        let pending = self
            .eth_client
            .send_transaction(tx, None)
            .await
            .map_err(ClientError::from_middleware_error::<M>)?;
        let receipt = confirm(pending).await?;
        info!("Transferred {value} wei to {to:?} (transaction {:?})", receipt.transaction_hash);
        Ok(receipt)
    }
}

/// Waits for the receipt of the pending transaction and checks its status
pub async fn confirm<P: JsonRpcClient>(
    pending: PendingTransaction<'_, P>,
) -> Result<TransactionReceipt, ClientError> {
    let tx_hash = *pending;
    debug!("Waiting for transaction {tx_hash:?}");

    let receipt = pending
        .await
        .map_err(|err| ClientError::from_provider_error(&err))?
        .ok_or(ClientError::Dropped(tx_hash))?;

    if receipt.status == Some(U64::zero()) {
        return Err(ClientError::Reverted { tx_hash, reason: None });
    }

    Ok(receipt)
}
