//! Test fakes for the on-chain operation traits
//!
//! Fake implementations of [`ContractDeployer`], [`ContractConfigurator`],
//! and [`ProgressReporter`] that let the orchestration driver be exercised
//! end to end without a blockchain: deployments yield deterministic
//! addresses, configuration calls are logged in submission order, and the
//! fake router records one processed message per transfer with a simulated
//! gas figure.

use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::progress::ProgressReporter;
use crate::traits::{ContractConfigurator, ContractDeployer};
use crate::{OpsError, Result};

/// Gas the fake router charges for executing a received message.
const RECEIVE_GAS_USED: u64 = 46_381;

/// Default block gas limit of the fake chain.
pub const FAKE_BLOCK_GAS_LIMIT: u64 = 30_000_000;

/// One entry in the fake backend's ordered call log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendCall {
    DeployTransferUsdc {
        router: Address,
        link: Address,
        usdc: Address,
    },
    DeployCrossChainReceiver {
        router: Address,
    },
    AllowlistSourceChain {
        receiver: Address,
        source_chain_selector: u64,
        allowed: bool,
    },
    AllowlistSender {
        receiver: Address,
        sender: Address,
        allowed: bool,
    },
    AllowlistDestinationChain {
        sender_contract: Address,
        destination_chain_selector: u64,
        allowed: bool,
    },
    TransferUsdc {
        sender_contract: Address,
        destination_chain_selector: u64,
        receiver: Address,
        amount: U256,
        gas_limit: u64,
    },
}

/// A message the fake router has processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouterMessage {
    pub destination_chain_selector: u64,
    pub receiver: Address,
    pub amount: U256,
    /// Gas the simulated receive-side execution consumed.
    pub gas_used: u64,
}

#[derive(Debug, Default)]
struct FakeState {
    nonce: u64,
    calls: Vec<BackendCall>,
    allowed_destinations: HashSet<(Address, u64)>,
    router_messages: Vec<RouterMessage>,
    fail_next_deploy: bool,
    fail_next_configure: bool,
}

/// A fake deployer/configurator backed by in-memory state.
///
/// Deployed addresses and transaction hashes are derived from a
/// monotonically increasing nonce, so tests are deterministic. Transfers
/// enforce the sender contract's destination allowlist the way the real
/// contract's modifier does.
#[derive(Clone, Debug)]
pub struct FakeChainBackend {
    state: Arc<Mutex<FakeState>>,
    block_gas_limit: u64,
}

impl Default for FakeChainBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeChainBackend {
    pub fn new() -> Self {
        Self {
            state: Arc::default(),
            block_gas_limit: FAKE_BLOCK_GAS_LIMIT,
        }
    }

    fn lock(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Make the next deploy fail with a simulated revert.
    pub fn fail_next_deploy(&self) {
        self.lock().fail_next_deploy = true;
    }

    /// Make the next configuration call fail with a simulated revert.
    pub fn fail_next_configure(&self) {
        self.lock().fail_next_configure = true;
    }

    /// The ordered log of every call the backend received.
    pub fn calls(&self) -> Vec<BackendCall> {
        self.lock().calls.clone()
    }

    /// Messages the fake router has processed, in order.
    pub fn router_messages(&self) -> Vec<RouterMessage> {
        self.lock().router_messages.clone()
    }

    /// The fake chain's block gas limit.
    pub fn block_gas_limit(&self) -> u64 {
        self.block_gas_limit
    }

    fn next_address(state: &mut FakeState) -> Address {
        state.nonce += 1;
        let mut bytes = [0u8; 20];
        bytes[12..].copy_from_slice(&state.nonce.to_be_bytes());
        Address::from(bytes)
    }

    fn next_tx_hash(state: &mut FakeState) -> TxHash {
        state.nonce += 1;
        let mut bytes = [0u8; 32];
        bytes[24..].copy_from_slice(&state.nonce.to_be_bytes());
        TxHash::from(bytes)
    }

    fn record_configure(&self, call: BackendCall) -> Result<TxHash> {
        let mut state = self.lock();
        state.calls.push(call);
        if state.fail_next_configure {
            state.fail_next_configure = false;
            return Err(OpsError::Configuration {
                reason: "simulated revert".to_string(),
            });
        }
        Ok(Self::next_tx_hash(&mut state))
    }
}

#[async_trait]
impl ContractDeployer for FakeChainBackend {
    async fn deploy_transfer_usdc(
        &self,
        router: Address,
        link: Address,
        usdc: Address,
    ) -> Result<Address> {
        let mut state = self.lock();
        state
            .calls
            .push(BackendCall::DeployTransferUsdc { router, link, usdc });
        if state.fail_next_deploy {
            state.fail_next_deploy = false;
            return Err(OpsError::Deployment {
                reason: "simulated revert".to_string(),
            });
        }
        Ok(Self::next_address(&mut state))
    }

    async fn deploy_cross_chain_receiver(&self, router: Address) -> Result<Address> {
        let mut state = self.lock();
        state
            .calls
            .push(BackendCall::DeployCrossChainReceiver { router });
        if state.fail_next_deploy {
            state.fail_next_deploy = false;
            return Err(OpsError::Deployment {
                reason: "simulated revert".to_string(),
            });
        }
        Ok(Self::next_address(&mut state))
    }
}

#[async_trait]
impl ContractConfigurator for FakeChainBackend {
    async fn allowlist_source_chain(
        &self,
        receiver: Address,
        source_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash> {
        self.record_configure(BackendCall::AllowlistSourceChain {
            receiver,
            source_chain_selector,
            allowed,
        })
    }

    async fn allowlist_sender(
        &self,
        receiver: Address,
        sender: Address,
        allowed: bool,
    ) -> Result<TxHash> {
        self.record_configure(BackendCall::AllowlistSender {
            receiver,
            sender,
            allowed,
        })
    }

    async fn allowlist_destination_chain(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash> {
        let hash = self.record_configure(BackendCall::AllowlistDestinationChain {
            sender_contract,
            destination_chain_selector,
            allowed,
        })?;
        let mut state = self.lock();
        if allowed {
            state
                .allowed_destinations
                .insert((sender_contract, destination_chain_selector));
        } else {
            state
                .allowed_destinations
                .remove(&(sender_contract, destination_chain_selector));
        }
        Ok(hash)
    }

    async fn transfer_usdc(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        receiver: Address,
        amount: U256,
        gas_limit: u64,
    ) -> Result<TxHash> {
        let mut state = self.lock();
        state.calls.push(BackendCall::TransferUsdc {
            sender_contract,
            destination_chain_selector,
            receiver,
            amount,
            gas_limit,
        });
        if state.fail_next_configure {
            state.fail_next_configure = false;
            return Err(OpsError::Configuration {
                reason: "simulated revert".to_string(),
            });
        }
        if !state
            .allowed_destinations
            .contains(&(sender_contract, destination_chain_selector))
        {
            return Err(OpsError::Configuration {
                reason: format!(
                    "destination chain {destination_chain_selector} is not allowlisted"
                ),
            });
        }

        let gas_used = RECEIVE_GAS_USED.min(self.block_gas_limit);
        state.router_messages.push(RouterMessage {
            destination_chain_selector,
            receiver,
            amount,
            gas_used,
        });
        Ok(Self::next_tx_hash(&mut state))
    }
}

/// Progress reporter that counts start/stop pairs instead of drawing.
#[derive(Debug, Default)]
pub struct FakeProgress {
    starts: AtomicUsize,
    stops: AtomicUsize,
    messages: Mutex<Vec<String>>,
}

impl FakeProgress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_count(&self) -> usize {
        self.starts.load(Ordering::SeqCst)
    }

    pub fn stop_count(&self) -> usize {
        self.stops.load(Ordering::SeqCst)
    }

    /// Messages passed to `start`, in order.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}

impl ProgressReporter for FakeProgress {
    fn start(&self, message: &str) {
        self.starts.fetch_add(1, Ordering::SeqCst);
        self.messages
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(message.to_string());
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fake_deploys_yield_distinct_addresses() {
        let backend = FakeChainBackend::new();
        let a = backend
            .deploy_cross_chain_receiver(Address::ZERO)
            .await
            .unwrap();
        let b = backend
            .deploy_transfer_usdc(Address::ZERO, Address::ZERO, Address::ZERO)
            .await
            .unwrap();
        assert_ne!(a, b);
        assert_eq!(backend.calls().len(), 2);
    }

    #[tokio::test]
    async fn transfer_requires_allowlisted_destination() {
        let backend = FakeChainBackend::new();
        let sender = backend
            .deploy_transfer_usdc(Address::ZERO, Address::ZERO, Address::ZERO)
            .await
            .unwrap();

        let err = backend
            .transfer_usdc(sender, 99, Address::ZERO, U256::from(1u64), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, OpsError::Configuration { .. }));
        assert!(backend.router_messages().is_empty());

        backend
            .allowlist_destination_chain(sender, 99, true)
            .await
            .unwrap();
        backend
            .transfer_usdc(sender, 99, Address::ZERO, U256::from(1u64), 0)
            .await
            .unwrap();
        assert_eq!(backend.router_messages().len(), 1);
    }

    #[tokio::test]
    async fn fail_flags_are_one_shot() {
        let backend = FakeChainBackend::new();
        backend.fail_next_deploy();

        assert!(backend
            .deploy_cross_chain_receiver(Address::ZERO)
            .await
            .is_err());
        assert!(backend
            .deploy_cross_chain_receiver(Address::ZERO)
            .await
            .is_ok());
    }
}
