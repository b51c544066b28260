//! The token deployment runner

use alloy::primitives::Address;
use tracing::{debug, error, info};

use crate::{
    artifacts::Blueprint,
    client::{NetworkClient, RpcClient},
    config::DeployConfig,
    constants::{SOLC_VERSION, TOKEN_CONSTRUCTOR_TYPES},
    errors::ScriptError,
    types::DeploymentParams,
    utils::setup_signer,
};

/// Connect to the configured network and deploy the token
pub async fn run(config: DeployConfig, params: DeploymentParams) -> Result<Address, ScriptError> {
    let client = RpcClient::new(config.network.url.clone());
    deploy_token(config, params, &client).await
}

/// Deploy the token through the given client and return its address
///
/// Every invocation submits a new creation transaction, there is no check for
/// an earlier deployment of the same token.
pub async fn deploy_token(
    config: DeployConfig,
    params: DeploymentParams,
    client: &impl NetworkClient,
) -> Result<Address, ScriptError> {
    let signer = setup_signer(&config.network)?;
    info!("Deploying {} with deployer: {}", params.symbol, signer.address());

    // Resolve everything that can fail locally before touching the network
    let blueprint = Blueprint::load(&config.artifacts_dir, &params.contract)?;
    blueprint.check_constructor(&TOKEN_CONSTRUCTOR_TYPES)?;
    debug!(
        "using {} from {} (solc {})",
        blueprint.name, blueprint.source, SOLC_VERSION
    );

    let args = params.constructor_args()?;
    let init_code = blueprint.init_code(&args);

    let tx_hash = client.send_deployment(&signer, init_code).await?;
    debug!("deployment transaction sent: {tx_hash}");

    let address = client.wait_for_deployment(tx_hash).await?;
    info!("{} deployed at: {}", params.symbol, address);

    Ok(address)
}

/// Map the outcome of a deployment to the process exit status, logging failures
pub fn exit_code(outcome: &Result<Address, ScriptError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(e) => {
            error!("Deployment failed: {e}");
            1
        }
    }
}
