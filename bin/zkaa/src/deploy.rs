use crate::cli::args::{
    AccountArgs, ArtifactsArgs, CreateWalletArgs, DeployFactoryArgs, DeployerArgs, NodeArgs,
    TransferArgs,
};
use ethers::{providers::Middleware, signers::Signer, types::U256};
use std::sync::Arc;
use tracing::info;
use zkaa_contracts::{
    send_transaction, AccountFactory, ArtifactRegistry, DeployOverrides, Deployer, ZkClient,
};
use zkaa_primitives::{
    constants::networks::LOCAL_CHAIN_ID,
    provider::{create_http_provider, create_signer_client, SignerClient},
    Eip712TransactionRequest, Salt, Wallet,
};

/// Connects to the node with the deployer wallet
async fn connect_deployer(
    node: &NodeArgs,
    deployer: &DeployerArgs,
) -> eyre::Result<(ZkClient<SignerClient>, Wallet)> {
    let config = node.network_config();
    info!("Connecting to {config}");

    let wallet = Wallet::from_private_key(deployer.private_key()?, LOCAL_CHAIN_ID)?;
    let eth_client = create_signer_client(&config.url, &wallet).await?;
    let wallet = wallet.with_chain_id(eth_client.signer().chain_id());

    Ok((ZkClient::new(Arc::new(eth_client)), wallet))
}

/// Deploys the account factory, deploys an account for a random owner and funds it
pub async fn deploy_factory(
    node: NodeArgs,
    deployer: DeployerArgs,
    artifacts: ArtifactsArgs,
    args: DeployFactoryArgs,
) -> eyre::Result<()> {
    let registry = ArtifactRegistry::load(&artifacts.artifacts.0)?;
    let (client, wallet) = connect_deployer(&node, &deployer).await?;
    let chain_id = wallet.chain_id();

    let deployer = Deployer::new(client.clone(), wallet);
    let factory = AccountFactory::deploy(
        &deployer,
        &registry,
        DeployOverrides::default().gas_limit(U256::from(args.gas_limit)),
    )
    .await?;

    let owner = Wallet::build_random(chain_id);
    info!("owner pk: {}", owner.private_key());

    let salt = Salt::zero();
    factory.deploy_account(salt, owner.address()).await?;

    let account = factory.calc_contract_account_address(salt, owner.address()).await?;
    info!("Account deployed on address {account:?}");

    let receipt = client.transfer(account, args.fund).await?;
    info!("hash: {:?}", receipt.transaction_hash);

    Ok(())
}

/// Deploys an account through an existing factory
pub async fn deploy_account(
    node: NodeArgs,
    deployer: DeployerArgs,
    args: AccountArgs,
) -> eyre::Result<()> {
    let (client, _) = connect_deployer(&node, &deployer).await?;
    let factory = AccountFactory::new(args.factory, client.eth_client());

    let account = factory.deploy_account_contract(args.owner, &args.salt).await?;
    info!("Account of {:?} deployed on address {:?}", args.owner, account.address);

    Ok(())
}

/// Sends value from an account contract (signed by the account owner)
pub async fn transfer(node: NodeArgs, args: TransferArgs) -> eyre::Result<()> {
    let config = node.network_config();
    let provider = create_http_provider(&config.url).await?;
    let chain_id = provider.get_chainid().await?.as_u64();
    let client = ZkClient::new(Arc::new(provider));

    let owner = Wallet::from_private_key(&args.owner_key, chain_id)?;
    let mut tx = Eip712TransactionRequest::new().to(args.to).value(args.value);
    if let Some(gas_limit) = args.gas_limit {
        tx = tx.gas_limit(U256::from(gas_limit));
    }

    let balance = client.balance(args.account).await?;
    info!("Account {:?} balance: {balance} wei", args.account);

    let receipt = send_transaction(&client, args.account, &owner, tx).await?;
    info!("hash: {:?}", receipt.transaction_hash);

    Ok(())
}

/// Prints the address of the account the factory deploys for the owner and salt
pub async fn account_address(node: NodeArgs, args: AccountArgs) -> eyre::Result<()> {
    let config = node.network_config();
    let provider = create_http_provider(&config.url).await?;
    let factory = AccountFactory::new(args.factory, Arc::new(provider));

    let salt = Salt::from_label(&args.salt);
    let address = factory.calc_contract_account_address(salt, args.owner).await?;
    info!("Account address (salt {salt}): {address:?}");

    Ok(())
}

pub fn create_wallet(args: CreateWalletArgs) -> eyre::Result<()> {
    info!("Creating wallet for chain {}", args.chain_id);

    let wallet = Wallet::build_random(args.chain_id);
    info!("Wallet address {:?}", wallet.address());
    info!("Wallet private key {}", wallet.private_key());

    Ok(())
}
