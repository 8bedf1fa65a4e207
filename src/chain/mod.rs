//! Chain configuration and contract addresses for CCIP
//!
//! This module contains the static routing table for all supported networks:
//! CCIP Router addresses, chain selectors, and the LINK/USDC token addresses
//! used as constructor arguments and fee tokens.

pub mod addresses;
mod config;

pub use config::{parse_network, CcipChain};
