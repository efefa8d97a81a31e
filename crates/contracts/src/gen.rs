use ethers::contract::abigen;

abigen!(
    AAFactory,
    r#"[
        function aaBytecodeHash() external view returns (bytes32)
        function deployAccount(bytes32 salt, address owner) external returns (address accountAddress)
    ]"#
);

abigen!(
    DefaultAccount,
    r#"[
        function owner() external view returns (address)
    ]"#
);

abigen!(
    ContractDeployer,
    r#"[
        function create(bytes32 salt, bytes32 bytecodeHash, bytes calldata input) external payable returns (address)
        event ContractDeployed(address indexed deployerAddress, bytes32 indexed bytecodeHash, address indexed contractAddress)
    ]"#
);
