//! Utilities for the deploy script.

use std::str::FromStr;

use alloy::signers::local::PrivateKeySigner;
use tracing::{Level, Subscriber};
use tracing_subscriber::{
    fmt::{writer::MakeWriterExt, MakeWriter},
    util::SubscriberInitExt,
};

use crate::{config::NetworkProfile, errors::ScriptError};

/// Set up logging: warnings and errors go to stderr, everything else to stdout
pub fn setup_logging() {
    log_subscriber(std::io::stderr, std::io::stdout).init();
}

/// Build a subscriber writing WARN and above to `errors` and all other events to `output`
pub fn log_subscriber<E, O>(errors: E, output: O) -> impl Subscriber + Send + Sync + 'static
where
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let writer = errors.with_max_level(Level::WARN).or_else(output);
    tracing_subscriber::fmt().with_writer(writer).with_target(false).with_ansi(false).finish()
}

/// Derive the deployer's signer from the network's configured key
///
/// Fails without touching the network if no key is configured or it is malformed.
pub fn setup_signer(network: &NetworkProfile) -> Result<PrivateKeySigner, ScriptError> {
    let priv_key = network.signing_key().ok_or_else(|| {
        ScriptError::Credential(format!("no private key configured for network {}", network.name))
    })?;

    // Never echo the key itself
    PrivateKeySigner::from_str(priv_key.trim())
        .map_err(|e| ScriptError::Credential(format!("malformed private key: {e}")))
}
