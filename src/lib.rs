//! # ccip-usdc-ops
//!
//! Deployment and configuration orchestrator for cross-chain USDC transfer
//! contracts riding on the Chainlink CCIP messaging protocol.
//!
//! The orchestrator sequences dependent on-chain operations — deploy,
//! wait-for-confirmation, persist the address, configure allowlists on two
//! independently-deployed contracts across two networks — with
//! partial-failure recovery via address lookups from prior runs. The smart
//! contracts themselves are external collaborators reached through typed
//! bindings.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ccip_usdc_ops::progress::NoopProgress;
//! use ccip_usdc_ops::tasks::{self, TaskContext};
//! use ccip_usdc_ops::testing::FakeChainBackend;
//! use ccip_usdc_ops::{DeploymentStore, OpsError};
//! use alloy_chains::NamedChain;
//!
//! # async fn example() -> Result<(), OpsError> {
//! let backend = FakeChainBackend::new();
//! let store = DeploymentStore::new("deployments");
//! let progress = NoopProgress;
//!
//! let ctx = TaskContext::builder()
//!     .chain(NamedChain::Sepolia)
//!     .deployer(&backend)
//!     .configurator(&backend)
//!     .store(&store)
//!     .progress(&progress)
//!     .build();
//!
//! // Deploy the sender; the address is persisted for later tasks.
//! let address = tasks::deploy_sender(&ctx, None, None, None).await?;
//! # Ok(())
//! # }
//! ```
//!
//! The production backend is [`AlloyBackend`], built from a wallet-carrying
//! Alloy provider; the `ccip-usdc-ops` binary wires it from CLI flags and
//! environment variables.
//!
//! ## Public API
//!
//! - [`tasks`] — the five named operations and their [`TaskContext`](tasks::TaskContext)
//! - [`CcipChain`] — routing parameters per supported network
//! - [`DeploymentStore`] and [`DeploymentRecord`] — persisted addresses
//! - [`ContractDeployer`] and [`ContractConfigurator`] — the injectable
//!   on-chain operation traits, with [`AlloyBackend`] in production and
//!   [`testing`] fakes for tests
//! - [`OpsError`] and [`Result`] — error types
//! - Contract wrappers for direct use: [`TransferUsdcContract`],
//!   [`CrossChainReceiverContract`]

pub mod artifacts;
pub mod chain;
pub mod cli;
pub mod config;
mod contracts;
mod error;
pub mod progress;
mod providers;
pub mod records;
mod resolve;
pub mod tasks;
pub mod testing;
mod traits;

pub use artifacts::ArtifactStore;
pub use chain::{parse_network, CcipChain};
pub use contracts::{
    cross_chain_receiver::CrossChainReceiverContract, transfer_usdc::TransferUsdcContract,
};
pub use error::{OpsError, Result};
pub use providers::AlloyBackend;
pub use records::{ContractRole, DeploymentRecord, DeploymentStore};
pub use resolve::resolve_or;
pub use traits::{ContractConfigurator, ContractDeployer};

// Public module for users who need custom instrumentation
pub mod spans;
