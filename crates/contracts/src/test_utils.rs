use crate::client::ZkClient;
use ethers::{
    providers::{MockProvider, Provider},
    types::{Transaction, TransactionReceipt, H256, U64},
};
use std::{sync::Arc, time::Duration};

pub type MockClient = ZkClient<Provider<MockProvider>>;

/// Client over a mocked provider which polls pending transactions without delay
pub fn mocked_client() -> (MockClient, MockProvider) {
    let (provider, mock) = Provider::mocked();
    let provider = provider.interval(Duration::from_millis(1));
    (ZkClient::new(Arc::new(provider)), mock)
}

/// Responses of a submission that gets included with the receipt
///
/// Responses are served last in, first out, so this has to be pushed before the responses of
/// the calls preceding the submission.
pub fn push_included(mock: &MockProvider, receipt: TransactionReceipt) -> eyre::Result<()> {
    let tx = Transaction {
        hash: receipt.transaction_hash,
        block_number: Some(U64::one()),
        ..Default::default()
    };

    mock.push::<TransactionReceipt, _>(receipt.clone())?;
    mock.push::<Transaction, _>(tx)?;
    mock.push::<H256, _>(receipt.transaction_hash)?;
    Ok(())
}

/// Requests of a submission after `eth_sendRawTransaction`
pub fn assert_polled(mock: &MockProvider, tx_hash: H256) -> eyre::Result<()> {
    mock.assert_request("eth_getTransactionByHash", [tx_hash])?;
    mock.assert_request("eth_getTransactionReceipt", [tx_hash])?;
    Ok(())
}
