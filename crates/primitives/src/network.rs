//! Network selection (local development node or public testnet)

use crate::constants::networks::{
    LOCAL_ETH_URL, LOCAL_ZKSYNC_URL, TESTNET_VERIFY_URL, TESTNET_ZKSYNC_URL,
};
use std::{env, fmt};
use strum_macros::{Display, EnumString};

/// Node environment value which selects the local network
pub const TEST_NODE_ENV: &str = "test";

/// Networks the contracts can be deployed to
#[derive(Clone, Copy, Debug, Display, EnumString, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Network {
    /// Local rollup node (with its local L1 node)
    Local,
    /// Public testnet
    Testnet,
}

impl Network {
    /// Selects the network from the node environment (`NODE_ENV`)
    pub fn from_node_env(node_env: Option<&str>) -> Self {
        match node_env {
            Some(TEST_NODE_ENV) => Self::Local,
            _ => Self::Testnet,
        }
    }
}

/// Endpoints of the network
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Selected network
    pub network: Network,
    /// Rollup node RPC endpoint
    pub url: String,
    /// L1 node RPC endpoint
    pub eth_network: Option<String>,
    /// Contract verification endpoint
    pub verify_url: Option<String>,
}

impl NetworkConfig {
    /// Local rollup and L1 nodes
    pub fn local() -> Self {
        Self {
            network: Network::Local,
            url: LOCAL_ZKSYNC_URL.into(),
            eth_network: Some(LOCAL_ETH_URL.into()),
            verify_url: None,
        }
    }

    /// Public testnet, `eth_network` is the upstream L1 endpoint (e.g. an Alchemy url)
    pub fn testnet(eth_network: Option<String>) -> Self {
        Self {
            network: Network::Testnet,
            url: TESTNET_ZKSYNC_URL.into(),
            eth_network,
            verify_url: Some(TESTNET_VERIFY_URL.into()),
        }
    }

    pub fn new(network: Network, eth_network: Option<String>) -> Self {
        match network {
            Network::Local => Self::local(),
            Network::Testnet => Self::testnet(eth_network),
        }
    }

    /// Builds the config from `NODE_ENV` and `ALCHEMY` environment variables
    pub fn from_env() -> Self {
        let node_env = env::var("NODE_ENV").ok();
        Self::new(Network::from_node_env(node_env.as_deref()), env::var("ALCHEMY").ok())
    }

    /// Overrides the rollup node endpoint
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

impl fmt::Display for NetworkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} network (rollup {}", self.network, self.url)?;
        if let Some(eth_network) = &self.eth_network {
            write!(f, ", L1 {eth_network}")?;
        }
        if let Some(verify_url) = &self.verify_url {
            write!(f, ", verification {verify_url}")?;
        }
        write!(f, ")")
    }
}
