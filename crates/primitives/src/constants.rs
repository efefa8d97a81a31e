//! zkSync account abstraction related constants

/// zkSync system contracts
pub mod system_contracts {
    use ethers::types::H160;

    /// Address of the contract deployer system contract (`0x...8006`)
    pub const CONTRACT_DEPLOYER_ADDRESS: H160 =
        H160([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x80, 0x06]);
}

/// EIP-712 (type 113) transactions
pub mod eip712 {
    /// Transaction type discriminator of account abstraction transactions
    pub const EIP712_TX_TYPE: u8 = 0x71;
    /// Default limit for the gas per pubdata byte the transaction is willing to pay
    pub const DEFAULT_GAS_PER_PUBDATA_LIMIT: u64 = 50_000;
    /// Name of the EIP-712 signing domain
    pub const DOMAIN_NAME: &str = "zkSync";
    /// Version of the EIP-712 signing domain
    pub const DOMAIN_VERSION: &str = "2";
    /// Encoded type of the signed transaction struct
    pub const TRANSACTION_TYPE: &str = "Transaction(uint256 txType,uint256 from,uint256 to,uint256 gasLimit,uint256 gasPerPubdataByteLimit,uint256 maxFeePerGas,uint256 maxPriorityFeePerGas,uint256 paymaster,uint256 nonce,uint256 value,bytes data,bytes32[] factoryDeps,bytes paymasterInput)";
}

/// Address derivation
pub mod create2 {
    /// Preimage of the CREATE2 prefix (`keccak256("zksyncCreate2")`)
    pub const CREATE2_PREFIX_PREIMAGE: &[u8] = b"zksyncCreate2";
}

/// Bytecode hashing
pub mod bytecode {
    /// Version byte of the versioned bytecode hash
    pub const BYTECODE_HASH_VERSION: u8 = 1;
    /// Bytecode is a sequence of 32-byte words
    pub const WORD_SIZE: usize = 32;
    /// Maximum number of words (must fit into two bytes)
    pub const MAX_WORDS: usize = (1 << 16) - 1;
}

/// Network endpoints
pub mod networks {
    /// Local rollup node
    pub const LOCAL_ZKSYNC_URL: &str = "http://localhost:3050";
    /// Local L1 node
    pub const LOCAL_ETH_URL: &str = "http://localhost:8545";
    /// Public testnet rollup node
    pub const TESTNET_ZKSYNC_URL: &str = "https://zksync2-testnet.zksync.dev";
    /// Public testnet contract verification endpoint
    pub const TESTNET_VERIFY_URL: &str =
        "https://zksync2-testnet-explorer.zksync.dev/contract_verification";
    /// Chain id of the local rollup node
    pub const LOCAL_CHAIN_ID: u64 = 270;
    /// Chain id of the public testnet
    pub const TESTNET_CHAIN_ID: u64 = 280;
}

/// Deployment defaults
pub mod deployment {
    /// Gas limit used by the deployment script for the factory
    pub const FACTORY_GAS_LIMIT: u64 = 50_000_000;
    /// Name of the factory artifact
    pub const FACTORY_ARTIFACT: &str = "AAFactory";
    /// Name of the account artifact
    pub const ACCOUNT_ARTIFACT: &str = "DefaultAccount";
    /// Default folder with compiled zksolc artifacts
    pub const ARTIFACTS_FOLDER_NAME: &str = "artifacts-zk";
}

/// Pre-funded wallets of the local development node
pub mod rich_wallets {
    /// (address, private key) pairs
    pub const RICH_WALLETS: [(&str, &str); 5] = [
        (
            "0x36615Cf349d7F6344891B1e7CA7C72883F5dc049",
            "0x7726827caac94a7f9e1b160f7ea819f172f7b6f9d2a97f992c38edeab82d4110",
        ),
        (
            "0xa61464658AfeAf65CccaaFD3a512b69A83B77618",
            "0xac1e735be8536c6534bb4f17f06f6afc73b2b5ba84ac2cfb12f7461b20c0bbe3",
        ),
        (
            "0x0D43eB5B8a47bA8900d84AA36656c92024e9772e",
            "0xd293c684d884d56f8d6abd64fc76757d3664904e309a0645baf8522ab6366d9e",
        ),
        (
            "0xA13c10C0D5bd6f79041B9835c63f91de35A15883",
            "0x850683b40d4a740aa6e745f889a6fdc8327be76e122f5aba645a5b02d0248db8",
        ),
        (
            "0x8002cD98Cfb563492A6fB3E7C8243b7B9Ad4cc92",
            "0xf12e28c0eb1ef4ff90478f6805b68d63737b7f33abfa091601140805da450d93",
        ),
    ];
}
