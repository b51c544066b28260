//! Definitions of errors that can occur while deploying the token contract

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deploy script
#[derive(Debug)]
pub enum ScriptError {
    /// Error initializing the RPC client, e.g. a malformed URL
    ClientInitialization(String),
    /// Missing or malformed private key
    Credential(String),
    /// The named contract artifact could not be found in the build output
    ArtifactLookup(String),
    /// Error parsing a Solidity compilation artifact
    ArtifactParsing(String),
    /// Error constructing the constructor calldata
    CalldataConstruction(String),
    /// Error submitting the contract-creation transaction
    ContractDeployment(String),
    /// Error awaiting the inclusion of the deployment transaction
    Confirmation(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ClientInitialization(s) => write!(f, "error initializing client: {}", s),
            ScriptError::Credential(s) => write!(f, "error loading signing key: {}", s),
            ScriptError::ArtifactLookup(s) => write!(f, "error looking up artifact: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::CalldataConstruction(s) => write!(f, "error constructing calldata: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::Confirmation(s) => write!(f, "error confirming deployment: {}", s),
        }
    }
}

impl Error for ScriptError {}
