//! Definitions of Solidity bindings used during deployment

use alloy::sol;

sol! {
    contract NonMintableToken {
        constructor(string name, string symbol, address owner, uint256 initialSupply);
    }
}
