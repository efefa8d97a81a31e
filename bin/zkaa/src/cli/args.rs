use crate::utils::{parse_address, parse_ether_value, parse_network, validate_private_key};
use clap::Parser;
use ethers::types::{Address, U256};
use expanded_pathbuf::ExpandedPathBuf;
use std::env;
use zkaa_primitives::{
    constants::{
        deployment::{ARTIFACTS_FOLDER_NAME, FACTORY_GAS_LIMIT},
        networks::LOCAL_CHAIN_ID,
    },
    Network, NetworkConfig,
};

/// Rollup node CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct NodeArgs {
    /// Network to connect to (`local` or `testnet`).
    ///
    /// By default, the network is selected by `NODE_ENV` (`test` selects the local network).
    #[clap(long, value_parser=parse_network)]
    pub network: Option<Network>,

    /// Overrides the rollup node RPC endpoint of the network.
    #[clap(long)]
    pub url: Option<String>,
}

impl NodeArgs {
    /// Endpoints of the selected network
    pub fn network_config(&self) -> NetworkConfig {
        let config = match self.network {
            Some(network) => NetworkConfig::new(network, env::var("ALCHEMY").ok()),
            None => NetworkConfig::from_env(),
        };

        match self.url.clone() {
            Some(url) => config.with_url(url),
            None => config,
        }
    }
}

/// Deployer wallet CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct DeployerArgs {
    /// Private key of the deployer wallet.
    #[clap(long, env = "PRIVATE_KEY", hide_env_values = true, value_parser=validate_private_key)]
    pub private_key: Option<String>,
}

impl DeployerArgs {
    pub fn private_key(&self) -> eyre::Result<&str> {
        self.private_key.as_deref().ok_or_else(|| eyre::eyre!("No private key"))
    }
}

/// Contract artifacts CLI args
#[derive(Debug, Clone, Parser)]
pub struct ArtifactsArgs {
    /// Directory with the compiled contract artifacts.
    #[clap(long, default_value = ARTIFACTS_FOLDER_NAME)]
    pub artifacts: ExpandedPathBuf,
}

/// Deploy factory CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct DeployFactoryArgs {
    /// Gas limit of the factory deployment.
    #[clap(long, default_value_t = FACTORY_GAS_LIMIT)]
    pub gas_limit: u64,

    /// Value (in ether) sent to the account deployed by the script.
    ///
    /// By default, this option is set to `0.01`.
    #[clap(long, default_value = "0.01", value_parser=parse_ether_value)]
    pub fund: U256,
}

/// Account CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct AccountArgs {
    /// Address of the account factory.
    #[clap(long, value_parser=parse_address)]
    pub factory: Address,

    /// Owner of the account.
    #[clap(long, value_parser=parse_address)]
    pub owner: Address,

    /// Label the salt is derived from (keccak256 of the label).
    #[clap(long)]
    pub salt: String,
}

/// Account transfer CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct TransferArgs {
    /// Address of the account contract which sends the value.
    #[clap(long, value_parser=parse_address)]
    pub account: Address,

    /// Private key of the account owner.
    #[clap(long, value_parser=validate_private_key)]
    pub owner_key: String,

    /// Recipient.
    #[clap(long, value_parser=parse_address)]
    pub to: Address,

    /// Value in ether.
    #[clap(long, value_parser=parse_ether_value)]
    pub value: U256,

    /// Gas limit (estimated by the node when not set).
    #[clap(long)]
    pub gas_limit: Option<u64>,
}

/// Create wallet CLI args
#[derive(Debug, Clone, Parser, PartialEq)]
pub struct CreateWalletArgs {
    /// The chain id.
    #[clap(long, default_value_t = LOCAL_CHAIN_ID)]
    pub chain_id: u64,
}
