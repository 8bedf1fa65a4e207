//! TransferUSDC contract bindings and wrapper
//!
//! The TransferUSDC contract sits on the source network. It burns USDC via
//! CCIP's token pool and sends the cross-chain message to the destination
//! chain selector; destinations must be allowlisted before a transfer.

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes, U256};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolConstructor};
use tracing::{debug, info};

use TransferUsdc::TransferUsdcInstance;

/// The TransferUSDC sender contract wrapper
pub struct TransferUsdcContract<P: Provider<Ethereum>> {
    instance: TransferUsdcInstance<P>,
}

impl<P: Provider<Ethereum>> TransferUsdcContract<P> {
    /// Create a new TransferUsdcContract at a deployed address.
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "transfer_usdc_contract_initialized"
        );
        Self {
            instance: TransferUsdcInstance::new(address, provider),
        }
    }

    /// Create the contract-creation transaction request.
    ///
    /// `creation_code` is the compiled creation bytecode from the contract
    /// artifact; the ABI-encoded constructor arguments are appended to it.
    pub fn deploy_request(
        creation_code: &Bytes,
        router: Address,
        link: Address,
        usdc: Address,
    ) -> TransactionRequest {
        let mut input = creation_code.to_vec();
        input.extend(
            TransferUsdc::constructorCall {
                _router: router,
                _link: link,
                _usdcToken: usdc,
            }
            .abi_encode(),
        );

        info!(
            router = %router,
            link = %link,
            usdc = %usdc,
            input_length_bytes = input.len(),
            event = "transfer_usdc_deploy_request_created"
        );

        TransactionRequest::default().with_deploy_code(input)
    }

    /// Create the transaction request for `allowlistDestinationChain`.
    pub fn allowlist_destination_chain_transaction(
        &self,
        from: Address,
        destination_chain_selector: u64,
        allowed: bool,
    ) -> TransactionRequest {
        info!(
            destination_chain_selector = destination_chain_selector,
            allowed = allowed,
            contract_address = %self.instance.address(),
            event = "allowlist_destination_chain_transaction_created"
        );

        self.instance
            .allowlistDestinationChain(destination_chain_selector, allowed)
            .from(from)
            .into_transaction_request()
    }

    /// Create the transaction request for `transferUsdc`.
    pub fn transfer_usdc_transaction(
        &self,
        from: Address,
        destination_chain_selector: u64,
        receiver: Address,
        amount: U256,
        gas_limit: u64,
    ) -> TransactionRequest {
        info!(
            destination_chain_selector = destination_chain_selector,
            receiver = %receiver,
            amount = %amount,
            gas_limit = gas_limit,
            contract_address = %self.instance.address(),
            event = "transfer_usdc_transaction_created"
        );

        self.instance
            .transferUsdc(destination_chain_selector, receiver, amount, gas_limit)
            .from(from)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

// Interface of the TransferUSDC sender contract, matching the on-chain ABI.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract TransferUsdc {
        constructor(address _router, address _link, address _usdcToken);

        event UsdcTransferred(
            bytes32 messageId,
            uint64 destinationChainSelector,
            address receiver,
            uint256 amount,
            uint256 ccipFee
        );

        function allowlistDestinationChain(uint64 _destinationChainSelector, bool _allowed) external;
        function transferUsdc(uint64 _destinationChainSelector, address _receiver, uint256 _amount, uint64 _gasLimit) external returns (bytes32 messageId);
    }
);
