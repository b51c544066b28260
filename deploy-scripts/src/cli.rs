//! Definitions of CLI arguments for the deploy script

use std::path::PathBuf;

use clap::{Args, Parser};

use crate::{
    config::{DeployConfig, NetworkProfile},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_BASE_SUPPLY, DEFAULT_CONTRACT_NAME, DEFAULT_TOKEN_DECIMALS,
        DEFAULT_TOKEN_NAME, DEFAULT_TOKEN_OWNER, DEFAULT_TOKEN_SYMBOL, PRIVATE_KEY_ENV_VAR,
        RPC_URL_ENV_VAR,
    },
    types::DeploymentParams,
};

/// Deploy a fixed-supply token contract to an EVM chain
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Network RPC URL
    #[arg(short, long, env = RPC_URL_ENV_VAR, default_value = "")]
    pub rpc_url: String,

    /// Private key of the deployer
    #[arg(short, long, env = PRIVATE_KEY_ENV_VAR, hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Directory holding the compiled contract artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts_dir: PathBuf,

    /// The token to deploy
    #[command(flatten)]
    pub token: TokenArgs,
}

/// The token to deploy
#[derive(Args, Debug)]
pub struct TokenArgs {
    /// Name of the compiled contract, or `<source>:<name>` if several sources define it
    #[arg(long, default_value = DEFAULT_CONTRACT_NAME)]
    pub contract: String,

    /// Token name
    #[arg(long, default_value = DEFAULT_TOKEN_NAME)]
    pub name: String,

    /// Token symbol
    #[arg(long, default_value = DEFAULT_TOKEN_SYMBOL)]
    pub symbol: String,

    /// Address receiving the full supply, in hex
    #[arg(long, default_value = DEFAULT_TOKEN_OWNER)]
    pub owner: String,

    /// Supply in whole tokens
    #[arg(long, default_value = DEFAULT_BASE_SUPPLY)]
    pub base_supply: String,

    /// Number of decimals the supply is scaled by
    #[arg(long, default_value_t = DEFAULT_TOKEN_DECIMALS)]
    pub decimals: u8,
}

impl From<TokenArgs> for DeploymentParams {
    fn from(args: TokenArgs) -> Self {
        Self {
            contract: args.contract,
            name: args.name,
            symbol: args.symbol,
            owner: args.owner,
            base_supply: args.base_supply,
            decimals: args.decimals,
        }
    }
}

impl Cli {
    /// Split the arguments into the runner's configuration and the token parameters
    pub fn into_parts(self) -> (DeployConfig, DeploymentParams) {
        let config = DeployConfig {
            network: NetworkProfile::custom(self.rpc_url, self.priv_key),
            artifacts_dir: self.artifacts_dir,
        };
        (config, self.token.into())
    }
}
