//! Core trait abstractions for on-chain operations.
//!
//! The orchestration driver never talks to a provider directly; it goes
//! through these traits, so tests can substitute fake implementations that
//! simulate deployments, allowlist calls, and router message processing
//! without a blockchain. The production implementations live in
//! [`crate::providers`], the fakes in [`crate::testing`].

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::Result;

/// Trait for contract-creation transactions.
///
/// Each method builds, signs, and submits a contract-creation transaction,
/// then blocks until it is included and yields the created contract address.
/// Reverts and network failures surface as [`crate::OpsError::Deployment`].
/// There is exactly one deployment per invocation and no retry; a failed
/// deployment terminates the task.
#[async_trait]
pub trait ContractDeployer: Send + Sync {
    /// Deploys the TransferUSDC sender contract.
    ///
    /// Constructor arguments are the CCIP Router, the LINK fee token, and
    /// the USDC token on the source network.
    async fn deploy_transfer_usdc(
        &self,
        router: Address,
        link: Address,
        usdc: Address,
    ) -> Result<Address>;

    /// Deploys the CrossChainReceiver contract.
    ///
    /// The only constructor argument is the CCIP Router on the destination
    /// network.
    async fn deploy_cross_chain_receiver(&self, router: Address) -> Result<Address>;
}

/// Trait for configuration transactions against already-deployed contracts.
///
/// Every call blocks until the transaction is confirmed before returning its
/// hash, so callers sequencing two calls get a hard ordering guarantee:
/// the first is confirmed on-chain before the second is even submitted.
/// Reverts and network failures surface as
/// [`crate::OpsError::Configuration`].
#[async_trait]
pub trait ContractConfigurator: Send + Sync {
    /// Allows (or disallows) a source chain selector on the receiver
    /// contract.
    async fn allowlist_source_chain(
        &self,
        receiver: Address,
        source_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash>;

    /// Allows (or disallows) a sender contract address on the receiver
    /// contract.
    async fn allowlist_sender(
        &self,
        receiver: Address,
        sender: Address,
        allowed: bool,
    ) -> Result<TxHash>;

    /// Allows (or disallows) a destination chain selector on the sender
    /// contract.
    async fn allowlist_destination_chain(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash>;

    /// Burns-and-sends USDC through the sender contract to a receiver on the
    /// destination chain.
    async fn transfer_usdc(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        receiver: Address,
        amount: U256,
        gas_limit: u64,
    ) -> Result<TxHash>;
}
