//! Alloy-based deployer and configurator implementations.

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, TxHash, U256};
use alloy_provider::Provider;
use alloy_rpc_types::{TransactionReceipt, TransactionRequest};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::artifacts::ArtifactStore;
use crate::contracts::cross_chain_receiver::CrossChainReceiverContract;
use crate::contracts::transfer_usdc::TransferUsdcContract;
use crate::error::{OpsError, Result};
use crate::traits::{ContractConfigurator, ContractDeployer};

/// Production backend wrapping an Alloy [`Provider`].
///
/// The provider is expected to carry a wallet filler for the deployer key;
/// `deployer` is that key's address and is set as the `from` of every
/// transaction. Creation bytecode comes from the [`ArtifactStore`].
///
/// Each operation submits exactly one transaction (deploys) or one
/// transaction per call (configuration) and blocks on its receipt before
/// returning. A reverted receipt is an error; there is no retry.
#[derive(Debug, Clone)]
pub struct AlloyBackend<P: Provider<Ethereum> + Clone> {
    provider: P,
    deployer: Address,
    artifacts: ArtifactStore,
}

impl<P: Provider<Ethereum> + Clone> AlloyBackend<P> {
    /// Creates a backend from a wallet-carrying provider.
    pub fn new(provider: P, deployer: Address, artifacts: ArtifactStore) -> Self {
        debug!(
            deployer = %deployer,
            event = "alloy_backend_initialized"
        );
        Self {
            provider,
            deployer,
            artifacts,
        }
    }

    /// Returns the deployer address transactions are sent from.
    pub fn deployer(&self) -> Address {
        self.deployer
    }

    /// Submits a transaction and blocks until its receipt is available.
    async fn send_and_confirm(
        &self,
        tx: TransactionRequest,
        describe: impl Fn(String) -> OpsError,
    ) -> Result<TransactionReceipt> {
        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| describe(format!("transaction submission failed: {e}")))?;

        debug!(
            tx_hash = %pending.tx_hash(),
            event = "transaction_submitted"
        );

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| describe(format!("waiting for confirmation failed: {e}")))?;

        if !receipt.status() {
            return Err(describe(format!(
                "transaction {} reverted",
                receipt.transaction_hash
            )));
        }
        Ok(receipt)
    }

    async fn deploy(
        &self,
        contract_name: &str,
        request: TransactionRequest,
    ) -> Result<Address> {
        let receipt = self
            .send_and_confirm(request.with_from(self.deployer), |reason| {
                OpsError::Deployment { reason }
            })
            .await?;

        let address = receipt
            .contract_address
            .ok_or_else(|| OpsError::Deployment {
                reason: format!(
                    "transaction {} confirmed but created no contract",
                    receipt.transaction_hash
                ),
            })?;

        info!(
            contract = contract_name,
            contract_address = %address,
            tx_hash = %receipt.transaction_hash,
            event = "contract_deployed"
        );
        Ok(address)
    }

    async fn configure(&self, operation: &str, tx: TransactionRequest) -> Result<TxHash> {
        let receipt = self
            .send_and_confirm(tx, |reason| OpsError::Configuration { reason })
            .await?;

        info!(
            operation = operation,
            tx_hash = %receipt.transaction_hash,
            event = "configuration_confirmed"
        );
        Ok(receipt.transaction_hash)
    }
}

#[async_trait]
impl<P: Provider<Ethereum> + Clone> ContractDeployer for AlloyBackend<P> {
    async fn deploy_transfer_usdc(
        &self,
        router: Address,
        link: Address,
        usdc: Address,
    ) -> Result<Address> {
        let code = self.artifacts.creation_code("TransferUSDC")?;
        let request = TransferUsdcContract::<P>::deploy_request(&code, router, link, usdc);
        self.deploy("TransferUSDC", request).await
    }

    async fn deploy_cross_chain_receiver(&self, router: Address) -> Result<Address> {
        let code = self.artifacts.creation_code("CrossChainReceiver")?;
        let request = CrossChainReceiverContract::<P>::deploy_request(&code, router);
        self.deploy("CrossChainReceiver", request).await
    }
}

#[async_trait]
impl<P: Provider<Ethereum> + Clone> ContractConfigurator for AlloyBackend<P> {
    async fn allowlist_source_chain(
        &self,
        receiver: Address,
        source_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash> {
        let contract = CrossChainReceiverContract::new(receiver, self.provider.clone());
        let tx = contract.allowlist_source_chain_transaction(
            self.deployer,
            source_chain_selector,
            allowed,
        );
        self.configure("allowlistSourceChain", tx).await
    }

    async fn allowlist_sender(
        &self,
        receiver: Address,
        sender: Address,
        allowed: bool,
    ) -> Result<TxHash> {
        let contract = CrossChainReceiverContract::new(receiver, self.provider.clone());
        let tx = contract.allowlist_sender_transaction(self.deployer, sender, allowed);
        self.configure("allowlistSender", tx).await
    }

    async fn allowlist_destination_chain(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        allowed: bool,
    ) -> Result<TxHash> {
        let contract = TransferUsdcContract::new(sender_contract, self.provider.clone());
        let tx = contract.allowlist_destination_chain_transaction(
            self.deployer,
            destination_chain_selector,
            allowed,
        );
        self.configure("allowlistDestinationChain", tx).await
    }

    async fn transfer_usdc(
        &self,
        sender_contract: Address,
        destination_chain_selector: u64,
        receiver: Address,
        amount: U256,
        gas_limit: u64,
    ) -> Result<TxHash> {
        let contract = TransferUsdcContract::new(sender_contract, self.provider.clone());
        let tx = contract.transfer_usdc_transaction(
            self.deployer,
            destination_chain_selector,
            receiver,
            amount,
            gas_limit,
        );
        self.configure("transferUsdc", tx).await
    }
}
