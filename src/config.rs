//! Environment-backed signer and endpoint configuration
//!
//! The deployer key and per-network RPC endpoints come from the process
//! environment (optionally seeded from a `.env` file by the binary):
//!
//! - `PRIVATE_KEY` — hex-encoded deployer private key
//! - `<NETWORK>_RPC_URL` — one per network, e.g. `SEPOLIA_RPC_URL`,
//!   `ARBITRUM_SEPOLIA_RPC_URL`
//!
//! Both are read once per invocation; nothing here touches a chain.

use std::env;

use alloy_chains::NamedChain;
use alloy_signer_local::PrivateKeySigner;
use url::Url;

use crate::{OpsError, Result};

const PRIVATE_KEY_VAR: &str = "PRIVATE_KEY";

/// Loads the deployer key from the `PRIVATE_KEY` environment variable.
pub fn private_key_signer() -> Result<PrivateKeySigner> {
    let key = env::var(PRIVATE_KEY_VAR).map_err(|_| OpsError::Signer {
        reason: format!("{PRIVATE_KEY_VAR} environment variable is not set"),
    })?;
    key.trim()
        .trim_start_matches("0x")
        .parse()
        .map_err(|e| OpsError::Signer {
            reason: format!("could not parse {PRIVATE_KEY_VAR}: {e}"),
        })
}

/// The environment variable holding the RPC endpoint for a network.
pub fn rpc_url_var(chain: NamedChain) -> String {
    format!(
        "{}_RPC_URL",
        chain.to_string().replace('-', "_").to_uppercase()
    )
}

/// Resolves the RPC endpoint URL for a network from the environment.
pub fn rpc_url(chain: NamedChain) -> Result<Url> {
    let var = rpc_url_var(chain);
    let raw = env::var(&var).map_err(|_| {
        OpsError::InvalidConfig(format!("{var} environment variable is not set"))
    })?;
    Url::parse(&raw)
        .map_err(|e| OpsError::InvalidConfig(format!("{var} is not a valid URL: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rpc_url_var_names_follow_network_names() {
        assert_eq!(rpc_url_var(NamedChain::Sepolia), "SEPOLIA_RPC_URL");
        assert_eq!(
            rpc_url_var(NamedChain::ArbitrumSepolia),
            "ARBITRUM_SEPOLIA_RPC_URL"
        );
        assert_eq!(
            rpc_url_var(NamedChain::BaseSepolia),
            "BASE_SEPOLIA_RPC_URL"
        );
    }
}
