//! Constants used in the deploy script

/// The environment variable holding the network RPC URL
pub const RPC_URL_ENV_VAR: &str = "L2_RPC_URL";

/// The environment variable holding the deployer's hex-encoded private key
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY_1";

/// The name of the network profile the deployment targets
pub const NETWORK_PROFILE_NAME: &str = "customnet";

/// The Solidity compiler version the contract artifacts are built with
pub const SOLC_VERSION: &str = "0.8.20";

/// The default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// The artifact subdirectory holding compiler inputs and outputs, never contract artifacts
pub const BUILD_INFO_DIR: &str = "build-info";

/// The file extension of a contract artifact
pub const ARTIFACT_EXTENSION: &str = "json";

/// The marker the compiler leaves in bytecode for unlinked libraries
pub const LIBRARY_PLACEHOLDER_MARKER: &str = "__$";

/// The Solidity types of the token constructor's parameters, in order
pub const TOKEN_CONSTRUCTOR_TYPES: [&str; 4] = ["string", "string", "address", "uint256"];

/// The number of confirmations to wait for the contract deployment transaction
pub const NUM_DEPLOY_CONFIRMATIONS: u64 = 1;

// --- Deployment literals --- //

/// The name of the compiled token contract
pub const DEFAULT_CONTRACT_NAME: &str = "NonMintableToken";

/// The token name
pub const DEFAULT_TOKEN_NAME: &str = "AIHI";

/// The token symbol
pub const DEFAULT_TOKEN_SYMBOL: &str = "AIHI";

/// The address receiving the full supply
pub const DEFAULT_TOKEN_OWNER: &str = "0x725615fb55fa22F6Ee512836d6d394765809D940";

/// The total supply in whole tokens
pub const DEFAULT_BASE_SUPPLY: &str = "199000000";

/// The number of decimals the token uses
pub const DEFAULT_TOKEN_DECIMALS: u8 = 18;
