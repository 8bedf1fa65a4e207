//! CrossChainReceiver contract bindings and wrapper
//!
//! The CrossChainReceiver sits on the destination network and accepts CCIP
//! messages only from allowlisted source chains and allowlisted sender
//! contracts. Both allowlist entries must be in place before a transfer can
//! be delivered; the source-chain entry gates message acceptance at the
//! outermost check, so it is configured first.

use alloy_network::{Ethereum, TransactionBuilder};
use alloy_primitives::{Address, Bytes};
use alloy_provider::Provider;
use alloy_rpc_types::TransactionRequest;
use alloy_sol_types::{sol, SolConstructor};
use tracing::{debug, info};

use CrossChainReceiver::CrossChainReceiverInstance;

/// The CrossChainReceiver contract wrapper
pub struct CrossChainReceiverContract<P: Provider<Ethereum>> {
    instance: CrossChainReceiverInstance<P>,
}

impl<P: Provider<Ethereum>> CrossChainReceiverContract<P> {
    /// Create a new CrossChainReceiverContract at a deployed address.
    pub fn new(address: Address, provider: P) -> Self {
        debug!(
            contract_address = %address,
            event = "cross_chain_receiver_contract_initialized"
        );
        Self {
            instance: CrossChainReceiverInstance::new(address, provider),
        }
    }

    /// Create the contract-creation transaction request.
    pub fn deploy_request(creation_code: &Bytes, router: Address) -> TransactionRequest {
        let mut input = creation_code.to_vec();
        input.extend(CrossChainReceiver::constructorCall { _router: router }.abi_encode());

        info!(
            router = %router,
            input_length_bytes = input.len(),
            event = "cross_chain_receiver_deploy_request_created"
        );

        TransactionRequest::default().with_deploy_code(input)
    }

    /// Create the transaction request for `allowlistSourceChain`.
    pub fn allowlist_source_chain_transaction(
        &self,
        from: Address,
        source_chain_selector: u64,
        allowed: bool,
    ) -> TransactionRequest {
        info!(
            source_chain_selector = source_chain_selector,
            allowed = allowed,
            contract_address = %self.instance.address(),
            event = "allowlist_source_chain_transaction_created"
        );

        self.instance
            .allowlistSourceChain(source_chain_selector, allowed)
            .from(from)
            .into_transaction_request()
    }

    /// Create the transaction request for `allowlistSender`.
    pub fn allowlist_sender_transaction(
        &self,
        from: Address,
        sender: Address,
        allowed: bool,
    ) -> TransactionRequest {
        info!(
            sender = %sender,
            allowed = allowed,
            contract_address = %self.instance.address(),
            event = "allowlist_sender_transaction_created"
        );

        self.instance
            .allowlistSender(sender, allowed)
            .from(from)
            .into_transaction_request()
    }

    /// Returns the contract address
    pub fn address(&self) -> Address {
        *self.instance.address()
    }
}

// Interface of the CrossChainReceiver contract, matching the on-chain ABI.
sol!(
    #[allow(missing_docs)]
    #[sol(rpc)]
    contract CrossChainReceiver {
        constructor(address _router);

        function allowlistSourceChain(uint64 _sourceChainSelector, bool _allowed) external;
        function allowlistSender(address _sender, bool _allowed) external;
    }
);
