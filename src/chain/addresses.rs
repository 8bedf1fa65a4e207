//! Contract and token addresses for all supported CCIP test networks
//!
//! This module centralizes the CCIP Router, LINK token, and USDC token
//! address constants, together with the CCIP chain selectors, for every
//! network the orchestrator can target.
//!
//! Reference: <https://docs.chain.link/ccip/directory/testnet>

use alloy_primitives::{address, Address};

// CCIP Router Addresses

/// <https://sepolia.etherscan.io/address/0x0BF3dE8c5D3e8A2B34D2BEeB17ABfCeBaf363A59>
pub const SEPOLIA_ROUTER_ADDRESS: Address = address!("0BF3dE8c5D3e8A2B34D2BEeB17ABfCeBaf363A59");

/// <https://sepolia.arbiscan.io/address/0x2a9C5afB0d0e4BAb2BCdaE109EC4b0c4Be15a165>
pub const ARBITRUM_SEPOLIA_ROUTER_ADDRESS: Address =
    address!("2a9C5afB0d0e4BAb2BCdaE109EC4b0c4Be15a165");

/// <https://base-sepolia.blockscout.com/address/0xD3b06cEbF099CE7DA4AcCf578aaebFDBd6e88a93>
pub const BASE_SEPOLIA_ROUTER_ADDRESS: Address =
    address!("D3b06cEbF099CE7DA4AcCf578aaebFDBd6e88a93");

/// <https://sepolia-optimism.etherscan.io/address/0x114A20A10b43D4115e5aeef7345a1A71d2a60C57>
pub const OPTIMISM_SEPOLIA_ROUTER_ADDRESS: Address =
    address!("114A20A10b43D4115e5aeef7345a1A71d2a60C57");

/// <https://testnet.snowtrace.io/address/0xF694E193200268f9a4868e4Aa017A0118C9a8177>
pub const AVALANCHE_FUJI_ROUTER_ADDRESS: Address =
    address!("F694E193200268f9a4868e4Aa017A0118C9a8177");

/// <https://amoy.polygonscan.com/address/0x9C32fCB86BF0f4a1A8921a9Fe46de3198bb884B2>
pub const POLYGON_AMOY_ROUTER_ADDRESS: Address =
    address!("9C32fCB86BF0f4a1A8921a9Fe46de3198bb884B2");

// CCIP Chain Selectors

/// Selector for Ethereum Sepolia as a CCIP destination
pub const SEPOLIA_CHAIN_SELECTOR: u64 = 16015286601757825753;

/// Selector for Arbitrum Sepolia as a CCIP destination
pub const ARBITRUM_SEPOLIA_CHAIN_SELECTOR: u64 = 3478487238524512106;

/// Selector for Base Sepolia as a CCIP destination
pub const BASE_SEPOLIA_CHAIN_SELECTOR: u64 = 10344971235874465080;

/// Selector for Optimism Sepolia as a CCIP destination
pub const OPTIMISM_SEPOLIA_CHAIN_SELECTOR: u64 = 5224473277236331295;

/// Selector for Avalanche Fuji as a CCIP destination
pub const AVALANCHE_FUJI_CHAIN_SELECTOR: u64 = 14767482510784806043;

/// Selector for Polygon Amoy as a CCIP destination
pub const POLYGON_AMOY_CHAIN_SELECTOR: u64 = 16281711391670634445;

// LINK Token Addresses

/// <https://docs.chain.link/resources/link-token-contracts>
pub const SEPOLIA_LINK_ADDRESS: Address = address!("779877A7B0D9E8603169DdbD7836e478b4624789");

/// <https://docs.chain.link/resources/link-token-contracts>
pub const ARBITRUM_SEPOLIA_LINK_ADDRESS: Address =
    address!("b1D4538B4571d411F07960EF2838Ce337FE1E80E");

/// <https://docs.chain.link/resources/link-token-contracts>
pub const BASE_SEPOLIA_LINK_ADDRESS: Address = address!("E4aB69C077896252FAFBD49EFD26B5D171A32410");

/// <https://docs.chain.link/resources/link-token-contracts>
pub const OPTIMISM_SEPOLIA_LINK_ADDRESS: Address =
    address!("E4aB69C077896252FAFBD49EFD26B5D171A32410");

/// <https://docs.chain.link/resources/link-token-contracts>
pub const AVALANCHE_FUJI_LINK_ADDRESS: Address =
    address!("0b9d5D9136855f6FEc3c0993feE6E9CE8a297846");

/// <https://docs.chain.link/resources/link-token-contracts>
pub const POLYGON_AMOY_LINK_ADDRESS: Address = address!("0Fd9e8d3aF1aaee056EB9e802c3A762a667b1904");

// USDC Token Addresses

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const SEPOLIA_USDC_ADDRESS: Address = address!("1c7D4B196Cb0C7B01d743Fbc6116a902379C7238");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const ARBITRUM_SEPOLIA_USDC_ADDRESS: Address =
    address!("75faf114eafb1BDbe2F0316DF893fd58CE46AA4d");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const BASE_SEPOLIA_USDC_ADDRESS: Address = address!("036CbD53842c5426634e7929541eC2318f3dCF7e");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const OPTIMISM_SEPOLIA_USDC_ADDRESS: Address =
    address!("5fd84259d66Cd46123540766Be93DFE6D43130D7");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const AVALANCHE_FUJI_USDC_ADDRESS: Address =
    address!("5425890298aed601595a70AB815c96711a31Bc65");

/// <https://developers.circle.com/stablecoins/usdc-on-test-networks>
pub const POLYGON_AMOY_USDC_ADDRESS: Address = address!("41E94Eb019C0762f9Bfcf9Fb1E58725BfB0e7582");
