//! Parameters of the token deployment

use std::str::FromStr;

use alloy::primitives::{Address, U256};

use crate::{
    constants::{
        DEFAULT_BASE_SUPPLY, DEFAULT_CONTRACT_NAME, DEFAULT_TOKEN_DECIMALS, DEFAULT_TOKEN_NAME,
        DEFAULT_TOKEN_OWNER, DEFAULT_TOKEN_SYMBOL,
    },
    errors::ScriptError,
    solidity::NonMintableToken,
};

/// The values a single token deployment is parameterized by
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentParams {
    /// The name of the compiled contract to deploy
    pub contract: String,
    /// The token name
    pub name: String,
    /// The token symbol
    pub symbol: String,
    /// The address receiving the full supply, in hex
    pub owner: String,
    /// The supply in whole tokens, as a decimal string
    pub base_supply: String,
    /// The number of decimals used to scale the supply
    pub decimals: u8,
}

impl Default for DeploymentParams {
    fn default() -> Self {
        Self {
            contract: DEFAULT_CONTRACT_NAME.to_string(),
            name: DEFAULT_TOKEN_NAME.to_string(),
            symbol: DEFAULT_TOKEN_SYMBOL.to_string(),
            owner: DEFAULT_TOKEN_OWNER.to_string(),
            base_supply: DEFAULT_BASE_SUPPLY.to_string(),
            decimals: DEFAULT_TOKEN_DECIMALS,
        }
    }
}

impl DeploymentParams {
    /// The total supply in base units, i.e. `base_supply * 10^decimals`
    pub fn total_supply(&self) -> Result<U256, ScriptError> {
        if self.base_supply.is_empty() {
            return Err(ScriptError::CalldataConstruction("empty base supply".to_string()));
        }

        let base = U256::from_str_radix(&self.base_supply, 10).map_err(|e| {
            ScriptError::CalldataConstruction(format!(
                "invalid base supply {:?}: {}",
                self.base_supply, e
            ))
        })?;

        U256::from(10u8)
            .checked_pow(U256::from(self.decimals))
            .and_then(|scale| base.checked_mul(scale))
            .ok_or_else(|| {
                ScriptError::CalldataConstruction(format!(
                    "supply {} with {} decimals overflows uint256",
                    self.base_supply, self.decimals
                ))
            })
    }

    /// Parse the owner address
    ///
    /// Only the hex encoding and length are checked, the EIP-55 checksum is not.
    pub fn owner_address(&self) -> Result<Address, ScriptError> {
        Address::from_str(&self.owner).map_err(|e| {
            ScriptError::CalldataConstruction(format!(
                "invalid owner address {:?}: {}",
                self.owner, e
            ))
        })
    }

    /// Build the constructor arguments in the order the contract declares them
    pub fn constructor_args(&self) -> Result<NonMintableToken::constructorCall, ScriptError> {
        Ok(NonMintableToken::constructorCall {
            name: self.name.clone(),
            symbol: self.symbol.clone(),
            owner: self.owner_address()?,
            initialSupply: self.total_supply()?,
        })
    }
}
