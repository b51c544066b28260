//! The network client through which deployments are submitted

use alloy::{
    network::{ReceiptResponse, TransactionBuilder},
    primitives::{Address, Bytes, TxHash},
    providers::{PendingTransactionBuilder, Provider, ProviderBuilder},
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use async_trait::async_trait;

use crate::{constants::NUM_DEPLOY_CONFIRMATIONS, errors::ScriptError};

/// A connection to a chain that can create contracts
#[async_trait]
pub trait NetworkClient: Send + Sync {
    /// Sign and broadcast a contract-creation transaction, returning its hash
    /// once the node has accepted it
    async fn send_deployment(
        &self,
        signer: &PrivateKeySigner,
        init_code: Bytes,
    ) -> Result<TxHash, ScriptError>;

    /// Wait for the deployment transaction to be mined and return the address
    /// of the created contract
    ///
    /// There is no timeout, an unresponsive node suspends the caller indefinitely.
    async fn wait_for_deployment(&self, tx_hash: TxHash) -> Result<Address, ScriptError>;
}

/// A JSON-RPC client over HTTP
#[derive(Clone, Debug)]
pub struct RpcClient {
    /// The RPC URL, as configured
    rpc_url: String,
}

impl RpcClient {
    /// Create a client for the given URL
    ///
    /// The URL is not validated until the first request.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self { rpc_url: rpc_url.into() }
    }

    /// Parse the configured URL
    fn url(&self) -> Result<Url, ScriptError> {
        Url::parse(&self.rpc_url).map_err(|e| {
            ScriptError::ClientInitialization(format!("invalid RPC URL {:?}: {}", self.rpc_url, e))
        })
    }
}

#[async_trait]
impl NetworkClient for RpcClient {
    async fn send_deployment(
        &self,
        signer: &PrivateKeySigner,
        init_code: Bytes,
    ) -> Result<TxHash, ScriptError> {
        // Nonce, gas and chain ID are filled in by the provider
        let provider = ProviderBuilder::new().wallet(signer.clone()).connect_http(self.url()?);
        let tx = TransactionRequest::default().with_deploy_code(init_code);

        let pending = provider
            .send_transaction(tx)
            .await
            .map_err(|e| ScriptError::ContractDeployment(e.to_string()))?;

        Ok(*pending.tx_hash())
    }

    async fn wait_for_deployment(&self, tx_hash: TxHash) -> Result<Address, ScriptError> {
        let provider = ProviderBuilder::new().connect_http(self.url()?);

        let receipt = PendingTransactionBuilder::new(provider.root().clone(), tx_hash)
            .with_required_confirmations(NUM_DEPLOY_CONFIRMATIONS)
            .get_receipt()
            .await
            .map_err(|e| ScriptError::Confirmation(e.to_string()))?;

        deployed_address(tx_hash, &receipt)
    }
}

/// The address of the contract a mined deployment transaction created
pub fn deployed_address(
    tx_hash: TxHash,
    receipt: &impl ReceiptResponse,
) -> Result<Address, ScriptError> {
    if !receipt.status() {
        return Err(ScriptError::Confirmation(format!("transaction {tx_hash} reverted")));
    }

    receipt.contract_address().ok_or_else(|| {
        ScriptError::Confirmation(format!("receipt of {tx_hash} has no contract address"))
    })
}
