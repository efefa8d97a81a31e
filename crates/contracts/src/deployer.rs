use crate::{
    artifact::Artifact,
    client::ZkClient,
    error::ClientError,
    gen::{contract_deployer::CreateCall, ContractDeployedFilter},
    transaction::send_transaction,
};
use ethers::{
    abi::{AbiEncode, RawLog, Token},
    contract::{Contract, EthEvent},
    providers::Middleware,
    types::{Address, Bytes, TransactionReceipt, U256},
};
use tracing::{debug, info};
use zkaa_primitives::{
    constants::system_contracts::CONTRACT_DEPLOYER_ADDRESS, Eip712TransactionRequest, Salt, Wallet,
};

/// Contract deployed on the rollup together with its bound instance
#[derive(Debug, Clone)]
pub struct DeployedContract<C> {
    contract: C,
    pub address: Address,
}

impl<C> DeployedContract<C> {
    pub fn new(contract: C, address: Address) -> Self {
        Self { contract, address }
    }

    pub fn contract(&self) -> &C {
        &self.contract
    }
}

/// Optional settings of a deployment
#[derive(Debug, Clone, Default)]
pub struct DeployOverrides {
    /// Fixed gas limit (skips the estimation)
    pub gas_limit: Option<U256>,
}

impl DeployOverrides {
    pub fn gas_limit(mut self, gas_limit: U256) -> Self {
        self.gas_limit = Some(gas_limit);
        self
    }
}

/// Deploys artifacts through the contract deployer system contract
pub struct Deployer<M: Middleware + 'static> {
    client: ZkClient<M>,
    wallet: Wallet,
}

impl<M: Middleware + 'static> Deployer<M> {
    pub fn new(client: ZkClient<M>, wallet: Wallet) -> Self {
        Self { client, wallet }
    }

    pub fn client(&self) -> &ZkClient<M> {
        &self.client
    }

    pub fn wallet(&self) -> &Wallet {
        &self.wallet
    }

    /// Deploys the artifact
    ///
    /// The bytecode of the artifact, its factory dependencies and the additional factory
    /// dependencies are published with the deployment transaction.
    ///
    /// # Arguments
    /// * `artifact` - The [Artifact](Artifact) to deploy
    /// * `constructor_args` - Arguments of the constructor
    /// * `overrides` - The [DeployOverrides](DeployOverrides) of the transaction
    /// * `additional_factory_deps` - Bytecodes the deployed contract needs besides its own
    ///   factory dependencies
    ///
    /// # Returns
    /// * `DeployedContract<Contract<M>>` - The address and the instance bound to the artifact ABI
    pub async fn deploy(
        &self,
        artifact: &Artifact,
        constructor_args: Vec<Token>,
        overrides: DeployOverrides,
        additional_factory_deps: Vec<Bytes>,
    ) -> Result<DeployedContract<Contract<M>>, ClientError> {
        let bytecode_hash = artifact.bytecode_hash()?;
        let input = artifact.encode_constructor(&constructor_args)?;

        let data = CreateCall {
            salt: Salt::zero().to_fixed_bytes(),
            bytecode_hash: bytecode_hash.to_fixed_bytes(),
            input,
        }
        .encode();

        let factory_deps = factory_deps(artifact, additional_factory_deps);
        debug!(
            "Deploying {} (bytecode hash {bytecode_hash:?}, {} factory deps)",
            artifact.name,
            factory_deps.len()
        );

        let mut tx = Eip712TransactionRequest::new()
            .to(CONTRACT_DEPLOYER_ADDRESS)
            .data(Bytes::from(data))
            .factory_deps(factory_deps);
        if let Some(gas_limit) = overrides.gas_limit {
            tx = tx.gas_limit(gas_limit);
        }

        let receipt =
            send_transaction(&self.client, self.wallet.address(), &self.wallet, tx).await?;
        let address = deployed_address(&receipt, self.wallet.address())?;
        info!("{} deployed at {address:?}", artifact.name);

        let contract = Contract::new(address, artifact.abi.clone(), self.client.eth_client());
        Ok(DeployedContract::new(contract, address))
    }
}

/// Bytecode, own factory dependencies and additional ones (without duplicates, order kept)
fn factory_deps(artifact: &Artifact, additional_factory_deps: Vec<Bytes>) -> Vec<Bytes> {
    let mut deps: Vec<Bytes> = vec![];
    for dep in std::iter::once(artifact.bytecode.clone())
        .chain(artifact.factory_deps.iter().cloned())
        .chain(additional_factory_deps)
    {
        if !deps.contains(&dep) {
            deps.push(dep);
        }
    }
    deps
}

/// Address of the last contract the deployer deployed in the transaction
fn deployed_address(
    receipt: &TransactionReceipt,
    deployer: Address,
) -> Result<Address, ClientError> {
    receipt
        .logs
        .iter()
        .filter(|log| {
            log.address == CONTRACT_DEPLOYER_ADDRESS &&
                log.topics.first() == Some(&ContractDeployedFilter::signature())
        })
        .filter_map(|log| ContractDeployedFilter::decode_log(&RawLog::from(log.clone())).ok())
        .filter(|event| event.deployer_address == deployer)
        .last()
        .map(|event| event.contract_address)
        .ok_or(ClientError::NoDeployment { deployer, tx_hash: receipt.transaction_hash })
}
