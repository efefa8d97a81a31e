//! Account factory: deploys account contracts with `create2` and derives their addresses

use crate::{
    artifact::ArtifactRegistry,
    client::confirm,
    deployer::{DeployOverrides, DeployedContract, Deployer},
    error::ClientError,
    gen::{AAFactory, DefaultAccount},
};
use ethers::{
    abi::Token,
    providers::Middleware,
    types::{Address, TransactionReceipt, H256},
};
use std::sync::Arc;
use tracing::info;
use zkaa_primitives::{
    constants::deployment::{ACCOUNT_ARTIFACT, FACTORY_ARTIFACT},
    create2_address, encode_owner, Salt,
};

#[derive(Clone)]
pub struct AccountFactory<M: Middleware + 'static> {
    address: Address,
    eth_client: Arc<M>,
    factory_api: AAFactory<M>,
}

impl<M: Middleware + 'static> AccountFactory<M> {
    /// Deploys the factory with the hash of the account bytecode as constructor argument
    ///
    /// The account bytecode is published as an additional factory dependency, so the factory
    /// is able to deploy accounts.
    pub async fn deploy(
        deployer: &Deployer<M>,
        registry: &ArtifactRegistry,
        overrides: DeployOverrides,
    ) -> Result<Self, ClientError> {
        let factory_artifact = registry.get(FACTORY_ARTIFACT)?;
        let account_artifact = registry.get(ACCOUNT_ARTIFACT)?;
        let account_bytecode_hash = account_artifact.bytecode_hash()?;

        let factory = deployer
            .deploy(
                factory_artifact,
                vec![Token::FixedBytes(account_bytecode_hash.as_bytes().to_vec())],
                overrides,
                vec![account_artifact.bytecode.clone()],
            )
            .await?;
        info!("AA factory address: {:?}", factory.address);

        Ok(Self::new(factory.address, deployer.client().eth_client()))
    }

    pub fn new(address: Address, eth_client: Arc<M>) -> Self {
        let factory_api = AAFactory::new(address, eth_client.clone());
        Self { address, eth_client, factory_api }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn factory_api(&self) -> &AAFactory<M> {
        &self.factory_api
    }

    /// Bytecode hash of the accounts the factory deploys
    pub async fn aa_bytecode_hash(&self) -> Result<H256, ClientError> {
        self.factory_api
            .aa_bytecode_hash()
            .call()
            .await
            .map(H256::from)
            .map_err(ClientError::from_contract_error::<M>)
    }

    /// Deploys an account owned by `owner`, fails if the salt was already used
    pub async fn deploy_account(
        &self,
        salt: Salt,
        owner: Address,
    ) -> Result<TransactionReceipt, ClientError> {
        let call = self.factory_api.deploy_account(salt.to_fixed_bytes(), owner);
        let pending = call.send().await.map_err(ClientError::from_contract_error::<M>)?;
        let receipt = confirm(pending).await?;
        info!(
            "Account of {owner:?} deployed with salt {salt} (transaction {:?})",
            receipt.transaction_hash
        );

        Ok(receipt)
    }

    /// Address of the account deployed with the salt for the owner
    pub async fn calc_contract_account_address(
        &self,
        salt: Salt,
        owner: Address,
    ) -> Result<Address, ClientError> {
        let bytecode_hash = self.aa_bytecode_hash().await?;
        Ok(create2_address(self.address, bytecode_hash, salt, &encode_owner(owner)))
    }

    /// Deploys an account with the salt derived from the label and binds it at its derived
    /// address
    pub async fn deploy_account_contract(
        &self,
        owner: Address,
        salt_label: &str,
    ) -> Result<DeployedContract<DefaultAccount<M>>, ClientError> {
        let salt = Salt::from_label(salt_label);
        self.deploy_account(salt, owner).await?;

        let address = self.calc_contract_account_address(salt, owner).await?;
        info!("Account deployed on address {address:?}");

        Ok(DeployedContract::new(DefaultAccount::new(address, self.eth_client.clone()), address))
    }
}
