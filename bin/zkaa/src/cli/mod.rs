use clap::{value_parser, Parser, Subcommand};

pub mod args;
pub mod commands;

/// The main zkaa CLI interface
#[derive(Debug, Parser)]
#[command(author, version, about = "zkaa", long_about = None)]
pub struct Cli {
    /// The command to execute
    #[clap(subcommand)]
    command: Commands,

    /// The verbosity level
    #[clap(long, short, global = true, default_value_t = 2, value_parser = value_parser!(u8).range(..=4))]
    verbosity: u8,
}

impl Cli {
    /// Get the log level based on the verbosity level
    pub fn get_log_level(&self) -> String {
        match self.verbosity {
            0 => "error",
            1 => "warn",
            2 => "info",
            3 => "debug",
            _ => "trace",
        }
        .into()
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Deploy the account factory, deploy an account for a random owner and fund it
    #[command(name = "deploy-factory")]
    DeployFactory(commands::DeployFactoryCommand),

    /// Deploy an account through an existing factory
    #[command(name = "deploy-account")]
    DeployAccount(commands::DeployAccountCommand),

    /// Send value from an account contract
    #[command(name = "transfer")]
    Transfer(commands::TransferCommand),

    /// Compute the address of an account deployed by the factory
    #[command(name = "account-address")]
    AccountAddress(commands::AccountAddressCommand),

    /// Create random wallet
    #[command(name = "create-wallet")]
    CreateWallet(commands::CreateWalletCommand),
}

pub fn run() -> eyre::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let rust_log = match std::env::var("RUST_LOG") {
        Ok(val) => format!("{val},zkaa={}", cli.get_log_level()),
        Err(_) => format!("zkaa={}", cli.get_log_level()),
    };
    std::env::set_var("RUST_LOG", rust_log);
    tracing_subscriber::fmt::init();

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;

    rt.block_on(async move {
        match cli.command {
            Commands::DeployFactory(command) => command.execute().await,
            Commands::DeployAccount(command) => command.execute().await,
            Commands::Transfer(command) => command.execute().await,
            Commands::AccountAddress(command) => command.execute().await,
            Commands::CreateWallet(command) => command.execute(),
        }
    })
}
