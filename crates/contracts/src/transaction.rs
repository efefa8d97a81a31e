//! Submission of type 113 transactions on behalf of account contracts

use crate::{client::ZkClient, error::ClientError};
use ethers::{
    providers::Middleware,
    types::{Address, TransactionReceipt, U256},
};
use tracing::{debug, info};
use zkaa_primitives::{
    constants::eip712::DEFAULT_GAS_PER_PUBDATA_LIMIT, Eip712TransactionRequest, Wallet,
};

/// Fills, signs and submits the transaction with the account as sender
///
/// Fee fields are final before the digest is signed by the owner, and the owner's signature is
/// attached as the custom signature before the transaction is serialized. The gas limit is only
/// estimated when the caller didn't set one.
///
/// # Arguments
/// * `client` - The [ZkClient](ZkClient) of the rollup node
/// * `account` - Address of the account contract that sends the transaction
/// * `owner` - Wallet whose signature the account accepts
/// * `tx` - The [Eip712TransactionRequest](Eip712TransactionRequest) (recipient, value, data)
///
/// # Returns
/// * `TransactionReceipt` - The receipt of the included (successful) transaction
pub async fn send_transaction<M: Middleware + 'static>(
    client: &ZkClient<M>,
    account: Address,
    owner: &Wallet,
    tx: Eip712TransactionRequest,
) -> Result<TransactionReceipt, ClientError> {
    let chain_id = client.chain_id().await?;
    let nonce = client.nonce(account).await?;
    let mut tx = tx
        .from(account)
        .chain_id(chain_id)
        .nonce(nonce)
        .gas_per_pubdata(U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT));

    tx = tx.gas_price(client.gas_price().await?);
    if tx.gas_limit.is_none() {
        let gas_limit = client.estimate_gas(&tx).await?;
        tx = tx.gas_limit(gas_limit);
    }

    let tx = owner
        .sign_transaction(&tx)
        .map_err(|err| ClientError::Wallet { inner: err.to_string() })?;

    let raw = tx.serialize()?;
    debug!("Submitting transaction from {account:?} (nonce {nonce})");

    let receipt = client.send_raw_transaction(raw).await?;
    info!("Transaction {:?} from {account:?} included", receipt.transaction_hash);

    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_polled, mocked_client, push_included};
    use ethers::{
        providers::Provider,
        types::{H256, U64},
    };
    use serde_json::json;
    use std::sync::Arc;
    use zkaa_primitives::constants::networks::LOCAL_CHAIN_ID;

    #[tokio::test]
    async fn fees_are_set_before_signing() -> eyre::Result<()> {
        let (provider, mock) = Provider::mocked();
        let client = ZkClient::new(Arc::new(provider));

        let account = Address::repeat_byte(0x11);
        let owner = Wallet::rich(1, LOCAL_CHAIN_ID)?;
        let tx = Eip712TransactionRequest::new()
            .to(Address::repeat_byte(0x22))
            .value(U256::exp10(16))
            .gas_limit(U256::from(1_000_000));

        // responses are served last in, first out
        mock.push::<U256, _>(U256::from(250_000_000))?;
        mock.push::<U256, _>(U256::from(7))?;
        mock.push::<U256, _>(U256::from(LOCAL_CHAIN_ID))?;

        // no response for the submission
        let res = send_transaction(&client, account, &owner, tx.clone()).await;
        assert!(matches!(res, Err(ClientError::Provider { .. })));

        let expected = owner.sign_transaction(
            &tx.from(account)
                .chain_id(LOCAL_CHAIN_ID)
                .nonce(U256::from(7))
                .gas_price(U256::from(250_000_000)),
        )?;

        mock.assert_request("eth_chainId", ())?;
        mock.assert_request("eth_getTransactionCount", [json!(account), json!("latest")])?;
        mock.assert_request("eth_gasPrice", ())?;
        mock.assert_request("eth_sendRawTransaction", [expected.serialize()?])?;
        Ok(())
    }

    #[tokio::test]
    async fn gas_is_estimated_after_fees_when_unset() -> eyre::Result<()> {
        let (client, mock) = mocked_client();

        let account = Address::repeat_byte(0x11);
        let owner = Wallet::rich(1, LOCAL_CHAIN_ID)?;
        let tx = Eip712TransactionRequest::new()
            .to(Address::repeat_byte(0x22))
            .value(U256::exp10(16));

        let receipt = TransactionReceipt {
            transaction_hash: H256::repeat_byte(0xaa),
            status: Some(U64::one()),
            ..Default::default()
        };
        push_included(&mock, receipt)?;
        mock.push::<U256, _>(U256::from(900_000))?;
        mock.push::<U256, _>(U256::from(250_000_000))?;
        mock.push::<U256, _>(U256::from(7))?;
        mock.push::<U256, _>(U256::from(LOCAL_CHAIN_ID))?;

        let receipt = send_transaction(&client, account, &owner, tx.clone()).await?;
        assert_eq!(receipt.transaction_hash, H256::repeat_byte(0xaa));

        let filled = tx
            .from(account)
            .chain_id(LOCAL_CHAIN_ID)
            .nonce(U256::from(7))
            .gas_per_pubdata(U256::from(DEFAULT_GAS_PER_PUBDATA_LIMIT))
            .gas_price(U256::from(250_000_000));
        let expected = owner.sign_transaction(&filled.clone().gas_limit(U256::from(900_000)))?;

        mock.assert_request("eth_chainId", ())?;
        mock.assert_request("eth_getTransactionCount", [json!(account), json!("latest")])?;
        mock.assert_request("eth_gasPrice", ())?;
        mock.assert_request("eth_estimateGas", [filled.call_request()])?;
        mock.assert_request("eth_sendRawTransaction", [expected.serialize()?])?;
        assert_polled(&mock, H256::repeat_byte(0xaa))?;
        Ok(())
    }
}
