//! zkSync account abstraction contract interfaces, artifacts and deployment

pub mod artifact;
pub mod client;
pub mod deployer;
mod error;
pub mod factory;
mod gen;
#[cfg(test)]
mod test_utils;
pub mod transaction;

pub use artifact::{Artifact, ArtifactRegistry};
pub use client::ZkClient;
pub use deployer::{DeployOverrides, DeployedContract, Deployer};
pub use error::{decode_revert_string, ClientError};
pub use factory::AccountFactory;
pub use gen::{AAFactory, ContractDeployedFilter, ContractDeployer, DefaultAccount};
pub use transaction::send_transaction;
