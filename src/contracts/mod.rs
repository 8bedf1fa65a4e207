//! Contract bindings
//!
//! Alloy-generated bindings and typed wrappers for the two externally-defined
//! contracts this orchestrator deploys and configures:
//!
//! - [`TransferUsdcContract`](transfer_usdc::TransferUsdcContract) — the
//!   sender contract on the source network
//! - [`CrossChainReceiverContract`](cross_chain_receiver::CrossChainReceiverContract) —
//!   the receiver contract on the destination network
//!
//! The business logic (allowlisting, fee computation, burn/mint routing)
//! lives inside the contracts themselves; these wrappers only build typed
//! transaction requests against the on-chain ABI.

pub mod cross_chain_receiver;
pub mod transfer_usdc;
