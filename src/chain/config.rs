//! CCIP chain configuration trait
//!
//! This module defines the `CcipChain` trait which resolves a network to its
//! CCIP routing parameters and token addresses. Every orchestration task
//! consults these lookups whenever a router, token, or selector flag is
//! omitted on the command line.

use alloy_chains::NamedChain;
use alloy_primitives::Address;

use super::addresses::{
    ARBITRUM_SEPOLIA_CHAIN_SELECTOR, ARBITRUM_SEPOLIA_LINK_ADDRESS,
    ARBITRUM_SEPOLIA_ROUTER_ADDRESS, ARBITRUM_SEPOLIA_USDC_ADDRESS,
    AVALANCHE_FUJI_CHAIN_SELECTOR, AVALANCHE_FUJI_LINK_ADDRESS, AVALANCHE_FUJI_ROUTER_ADDRESS,
    AVALANCHE_FUJI_USDC_ADDRESS, BASE_SEPOLIA_CHAIN_SELECTOR, BASE_SEPOLIA_LINK_ADDRESS,
    BASE_SEPOLIA_ROUTER_ADDRESS, BASE_SEPOLIA_USDC_ADDRESS, OPTIMISM_SEPOLIA_CHAIN_SELECTOR,
    OPTIMISM_SEPOLIA_LINK_ADDRESS, OPTIMISM_SEPOLIA_ROUTER_ADDRESS, OPTIMISM_SEPOLIA_USDC_ADDRESS,
    POLYGON_AMOY_CHAIN_SELECTOR, POLYGON_AMOY_LINK_ADDRESS, POLYGON_AMOY_ROUTER_ADDRESS,
    POLYGON_AMOY_USDC_ADDRESS, SEPOLIA_CHAIN_SELECTOR, SEPOLIA_LINK_ADDRESS,
    SEPOLIA_ROUTER_ADDRESS, SEPOLIA_USDC_ADDRESS,
};
use crate::{OpsError, Result};

/// CCIP chain configuration trait
///
/// Implemented on `alloy_chains::NamedChain` to provide the routing
/// parameters and token addresses for each supported network.
///
/// All lookups are pure: no I/O happens beyond reading the static tables in
/// [`super::addresses`].
///
/// # Example
///
/// ```rust
/// use ccip_usdc_ops::CcipChain;
/// use alloy_chains::NamedChain;
///
/// let chain = NamedChain::Sepolia;
/// assert!(chain.supports_ccip());
/// assert!(chain.router_address().is_ok());
/// ```
pub trait CcipChain {
    /// Returns true if this chain has a CCIP routing entry
    fn supports_ccip(&self) -> bool;

    /// Returns the CCIP Router contract address for this chain
    ///
    /// The Router is the on-chain entry point that relays cross-chain
    /// messages; it is passed to both contract constructors.
    fn router_address(&self) -> Result<Address>;

    /// Returns the CCIP chain selector identifying this chain as a
    /// destination network
    fn chain_selector(&self) -> Result<u64>;

    /// Returns the LINK token address used to pay CCIP fees on this chain
    fn link_token_address(&self) -> Result<Address>;

    /// Returns the USDC token address on this chain
    fn usdc_token_address(&self) -> Result<Address>;
}

impl CcipChain for NamedChain {
    fn supports_ccip(&self) -> bool {
        matches!(
            self,
            Self::Sepolia
                | Self::ArbitrumSepolia
                | Self::BaseSepolia
                | Self::OptimismSepolia
                | Self::AvalancheFuji
                | Self::PolygonAmoy
        )
    }

    fn router_address(&self) -> Result<Address> {
        match self {
            Self::Sepolia => Ok(SEPOLIA_ROUTER_ADDRESS),
            Self::ArbitrumSepolia => Ok(ARBITRUM_SEPOLIA_ROUTER_ADDRESS),
            Self::BaseSepolia => Ok(BASE_SEPOLIA_ROUTER_ADDRESS),
            Self::OptimismSepolia => Ok(OPTIMISM_SEPOLIA_ROUTER_ADDRESS),
            Self::AvalancheFuji => Ok(AVALANCHE_FUJI_ROUTER_ADDRESS),
            Self::PolygonAmoy => Ok(POLYGON_AMOY_ROUTER_ADDRESS),
            _ => Err(OpsError::unknown_network(*self)),
        }
    }

    fn chain_selector(&self) -> Result<u64> {
        match self {
            Self::Sepolia => Ok(SEPOLIA_CHAIN_SELECTOR),
            Self::ArbitrumSepolia => Ok(ARBITRUM_SEPOLIA_CHAIN_SELECTOR),
            Self::BaseSepolia => Ok(BASE_SEPOLIA_CHAIN_SELECTOR),
            Self::OptimismSepolia => Ok(OPTIMISM_SEPOLIA_CHAIN_SELECTOR),
            Self::AvalancheFuji => Ok(AVALANCHE_FUJI_CHAIN_SELECTOR),
            Self::PolygonAmoy => Ok(POLYGON_AMOY_CHAIN_SELECTOR),
            _ => Err(OpsError::unknown_network(*self)),
        }
    }

    fn link_token_address(&self) -> Result<Address> {
        match self {
            Self::Sepolia => Ok(SEPOLIA_LINK_ADDRESS),
            Self::ArbitrumSepolia => Ok(ARBITRUM_SEPOLIA_LINK_ADDRESS),
            Self::BaseSepolia => Ok(BASE_SEPOLIA_LINK_ADDRESS),
            Self::OptimismSepolia => Ok(OPTIMISM_SEPOLIA_LINK_ADDRESS),
            Self::AvalancheFuji => Ok(AVALANCHE_FUJI_LINK_ADDRESS),
            Self::PolygonAmoy => Ok(POLYGON_AMOY_LINK_ADDRESS),
            _ => Err(OpsError::unknown_network(*self)),
        }
    }

    fn usdc_token_address(&self) -> Result<Address> {
        match self {
            Self::Sepolia => Ok(SEPOLIA_USDC_ADDRESS),
            Self::ArbitrumSepolia => Ok(ARBITRUM_SEPOLIA_USDC_ADDRESS),
            Self::BaseSepolia => Ok(BASE_SEPOLIA_USDC_ADDRESS),
            Self::OptimismSepolia => Ok(OPTIMISM_SEPOLIA_USDC_ADDRESS),
            Self::AvalancheFuji => Ok(AVALANCHE_FUJI_USDC_ADDRESS),
            Self::PolygonAmoy => Ok(POLYGON_AMOY_USDC_ADDRESS),
            _ => Err(OpsError::unknown_network(*self)),
        }
    }
}

/// Parses a network name into a supported chain.
///
/// Accepts the canonical `alloy_chains` names (e.g. `sepolia`,
/// `arbitrum-sepolia`). Names that parse but have no CCIP entry, and names
/// that do not parse at all, both fail with [`OpsError::UnknownNetwork`].
pub fn parse_network(name: &str) -> Result<NamedChain> {
    let chain: NamedChain = name.parse().map_err(|_| OpsError::UnknownNetwork {
        chain: name.to_string(),
    })?;
    if !chain.supports_ccip() {
        return Err(OpsError::unknown_network(chain));
    }
    Ok(chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(NamedChain::Sepolia)]
    #[case(NamedChain::ArbitrumSepolia)]
    #[case(NamedChain::BaseSepolia)]
    #[case(NamedChain::OptimismSepolia)]
    #[case(NamedChain::AvalancheFuji)]
    #[case(NamedChain::PolygonAmoy)]
    fn supported_chains_resolve_fully(#[case] chain: NamedChain) {
        assert!(chain.supports_ccip());
        assert_ne!(chain.router_address().unwrap(), Address::ZERO);
        assert_ne!(chain.chain_selector().unwrap(), 0);
        assert_ne!(chain.link_token_address().unwrap(), Address::ZERO);
        assert_ne!(chain.usdc_token_address().unwrap(), Address::ZERO);
    }

    #[rstest]
    #[case(NamedChain::Mainnet)]
    #[case(NamedChain::BinanceSmartChain)]
    fn unsupported_chains_fail(#[case] chain: NamedChain) {
        assert!(!chain.supports_ccip());
        assert!(matches!(
            chain.router_address().unwrap_err(),
            OpsError::UnknownNetwork { .. }
        ));
        assert!(matches!(
            chain.chain_selector().unwrap_err(),
            OpsError::UnknownNetwork { .. }
        ));
    }

    #[test]
    fn parse_network_accepts_canonical_names() {
        assert_eq!(parse_network("sepolia").unwrap(), NamedChain::Sepolia);
        assert_eq!(
            parse_network("arbitrum-sepolia").unwrap(),
            NamedChain::ArbitrumSepolia
        );
    }

    #[test]
    fn parse_network_rejects_unknown_names() {
        let err = parse_network("not-a-network").unwrap_err();
        assert!(matches!(err, OpsError::UnknownNetwork { .. }));

        // Parses as a chain, but CCIP does not route to it here.
        let err = parse_network("mainnet").unwrap_err();
        assert!(matches!(err, OpsError::UnknownNetwork { .. }));
    }
}
