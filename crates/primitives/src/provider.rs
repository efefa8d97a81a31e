//! Utils for creating ethers providers

use crate::{constants::networks::LOCAL_CHAIN_ID, Wallet};
use ethers::{
    middleware::SignerMiddleware,
    providers::{Http, Middleware, Provider},
    signers::LocalWallet,
    types::U256,
};
use std::time::Duration;
use tracing::debug;

/// Provider which signs the transactions of the wallet it was built with
pub type SignerClient = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Creates ethers provider with HTTP connection
pub async fn create_http_provider(addr: &str) -> eyre::Result<Provider<Http>> {
    let provider = Provider::<Http>::try_from(addr)?;

    let chain_id = provider.get_chainid().await?;
    debug!("Connected to {addr} (chain id {chain_id})");

    Ok(provider.interval(if chain_id == U256::from(LOCAL_CHAIN_ID) {
        Duration::from_millis(5u64)
    } else {
        Duration::from_millis(500u64)
    }))
}

/// Creates HTTP provider signing with the given wallet (wallet's chain id is replaced with
/// the node's chain id)
pub async fn create_signer_client(addr: &str, wallet: &Wallet) -> eyre::Result<SignerClient> {
    let provider = create_http_provider(addr).await?;
    let chain_id = provider.get_chainid().await?;
    Ok(SignerMiddleware::new(provider, wallet.with_chain_id(chain_id.as_u64()).signer))
}
