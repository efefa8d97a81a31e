use ethers::{
    providers::Middleware,
    types::{Address, U256},
    utils::parse_ether,
};
use std::{env, path::PathBuf, sync::Arc};
use zkaa_contracts::{
    AccountFactory, ArtifactRegistry, DefaultAccount, DeployOverrides, DeployedContract,
    Deployer, ZkClient,
};
use zkaa_primitives::{
    constants::{deployment::ARTIFACTS_FOLDER_NAME, networks::LOCAL_CHAIN_ID},
    provider::{create_signer_client, SignerClient},
    NetworkConfig, Wallet,
};

/// Enables the suites which need a running local rollup node
pub const E2E_ENV: &str = "ZKSYNC_E2E";
/// Overrides the directory with the compiled artifacts
pub const ARTIFACTS_ENV: &str = "ZKAA_ARTIFACTS";

pub type ClientType = SignerClient;

/// State shared by the steps of a suite (established once, later steps depend on earlier
/// chain state)
pub struct TestContext<M: Middleware + 'static> {
    pub client: ZkClient<M>,
    pub deployer: Wallet,
    pub owner: Wallet,
    pub factory: AccountFactory<M>,
    pub account1: DeployedContract<DefaultAccount<M>>,
    pub account2: Option<DeployedContract<DefaultAccount<M>>>,
}

/// Balances of the deployer, an account contract and its owner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balances {
    pub deployer_wallet_balance: U256,
    pub contract_account_balance: U256,
    pub client_wallet_balance: U256,
}

pub fn e2e_enabled() -> bool {
    env::var(E2E_ENV).is_ok()
}

pub fn artifacts_dir() -> PathBuf {
    env::var(ARTIFACTS_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(ARTIFACTS_FOLDER_NAME))
}

pub fn ether(value: &str) -> eyre::Result<U256> {
    Ok(parse_ether(value)?)
}

pub async fn get_balances<M: Middleware + 'static>(
    client: &ZkClient<M>,
    deployer: &Wallet,
    account: Address,
    owner: &Wallet,
) -> eyre::Result<Balances> {
    Ok(Balances {
        deployer_wallet_balance: client.balance(deployer.address()).await?,
        contract_account_balance: client.balance(account).await?,
        client_wallet_balance: client.balance(owner.address()).await?,
    })
}

/// Deploys the factory and the first account (salt `1`) with the first rich wallet
pub async fn setup() -> eyre::Result<TestContext<ClientType>> {
    dotenv::dotenv().ok();

    let registry = ArtifactRegistry::load(artifacts_dir())?;
    let config = NetworkConfig::local();

    let deployer = Wallet::rich(0, LOCAL_CHAIN_ID)?;
    let eth_client = create_signer_client(&config.url, &deployer).await?;
    let client = ZkClient::new(Arc::new(eth_client));
    let owner = Wallet::build_random(LOCAL_CHAIN_ID);

    let factory = AccountFactory::deploy(
        &Deployer::new(client.clone(), deployer.clone()),
        &registry,
        DeployOverrides::default(),
    )
    .await?;
    let account1 = factory.deploy_account_contract(owner.address(), "1").await?;

    Ok(TestContext { client, deployer, owner, factory, account1, account2: None })
}
