//! Network configuration resolved once at start-up

use std::path::PathBuf;

use tracing::debug;

use crate::constants::NETWORK_PROFILE_NAME;

/// Load a `.env` file from the working directory into the process environment
///
/// A missing file is not an error, values already present in the environment win.
pub fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("no .env file found"),
        Err(e) => debug!("failed to load .env file: {}", e),
    }
}

/// A named network the deployment can target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkProfile {
    /// The profile name
    pub name: String,
    /// The RPC endpoint, possibly empty
    pub url: String,
    /// The private keys available for signing on this network
    pub accounts: Vec<String>,
}

impl NetworkProfile {
    /// Build the `customnet` profile from an RPC URL and an optional private key
    ///
    /// An unset or empty key yields an empty account list.
    pub fn custom(url: String, priv_key: Option<String>) -> Self {
        let accounts = priv_key.filter(|key| !key.is_empty()).into_iter().collect();
        Self {
            name: NETWORK_PROFILE_NAME.to_string(),
            url,
            accounts,
        }
    }

    /// The key the deployer signs with
    pub fn signing_key(&self) -> Option<&str> {
        self.accounts.first().map(String::as_str)
    }
}

/// Everything the runner needs to know about its environment
#[derive(Clone, Debug)]
pub struct DeployConfig {
    /// The network to deploy to
    pub network: NetworkProfile,
    /// The directory holding the compiled contract artifacts
    pub artifacts_dir: PathBuf,
}
