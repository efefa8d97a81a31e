use super::args::{
    AccountArgs, ArtifactsArgs, CreateWalletArgs, DeployFactoryArgs, DeployerArgs, NodeArgs,
    TransferArgs,
};
use crate::deploy::{account_address, create_wallet, deploy_account, deploy_factory, transfer};
use clap::Parser;

/// Deploy the account factory, deploy an account for a random owner and fund it
#[derive(Debug, Parser)]
pub struct DeployFactoryCommand {
    /// Rollup node args
    #[clap(flatten)]
    node: NodeArgs,

    /// Deployer wallet args
    #[clap(flatten)]
    deployer: DeployerArgs,

    /// Contract artifacts args
    #[clap(flatten)]
    artifacts: ArtifactsArgs,

    /// Deploy factory args
    #[clap(flatten)]
    deploy_factory: DeployFactoryArgs,
}

impl DeployFactoryCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        deploy_factory(self.node, self.deployer, self.artifacts, self.deploy_factory).await
    }
}

/// Deploy an account through an existing factory
#[derive(Debug, Parser)]
pub struct DeployAccountCommand {
    /// Rollup node args
    #[clap(flatten)]
    node: NodeArgs,

    /// Deployer wallet args
    #[clap(flatten)]
    deployer: DeployerArgs,

    /// Account args
    #[clap(flatten)]
    account: AccountArgs,
}

impl DeployAccountCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        deploy_account(self.node, self.deployer, self.account).await
    }
}

/// Send value from an account contract
#[derive(Debug, Parser)]
pub struct TransferCommand {
    /// Rollup node args
    #[clap(flatten)]
    node: NodeArgs,

    /// Transfer args
    #[clap(flatten)]
    transfer: TransferArgs,
}

impl TransferCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        transfer(self.node, self.transfer).await
    }
}

/// Compute the address of an account deployed by the factory
#[derive(Debug, Parser)]
pub struct AccountAddressCommand {
    /// Rollup node args
    #[clap(flatten)]
    node: NodeArgs,

    /// Account args
    #[clap(flatten)]
    account: AccountArgs,
}

impl AccountAddressCommand {
    /// Execute the command
    pub async fn execute(self) -> eyre::Result<()> {
        account_address(self.node, self.account).await
    }
}

/// Create random wallet (e.g. for account owners)
#[derive(Debug, Parser)]
pub struct CreateWalletCommand {
    /// All create wallet args
    #[clap(flatten)]
    create_wallet: CreateWalletArgs,
}

impl CreateWalletCommand {
    /// Execute the command
    pub fn execute(self) -> eyre::Result<()> {
        create_wallet(self.create_wallet)
    }
}
