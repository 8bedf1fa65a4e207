//! Span helpers for orchestration operations
//!
//! Static span names with structured attributes, kept separate from the task
//! logic. Used internally by the providers and tasks, and exposed publicly
//! for users who drive the library directly and want the same
//! instrumentation.

use alloy_chains::NamedChain;
use alloy_primitives::{Address, U256};
use tracing::Span;

/// Create span for a contract deployment.
///
/// Parent: Top-level task span (auto-attached by tracing)
/// Children: Provider RPC calls (from alloy instrumentation)
#[inline]
pub fn deploy_contract(contract: &str, chain: &NamedChain) -> Span {
    tracing::info_span!(
        "ccip_usdc_ops.deploy_contract",
        contract = contract,
        chain = %chain,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for an allowlist configuration call.
///
/// Parent: Top-level task span
/// Children: Provider RPC calls
#[inline]
pub fn configure_contract(operation: &str, contract_address: &Address) -> Span {
    tracing::info_span!(
        "ccip_usdc_ops.configure_contract",
        operation = operation,
        contract_address = %contract_address,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for the terminal transfer operation.
///
/// Parent: Top-level task span
/// Children: Provider RPC calls
#[inline]
pub fn transfer_usdc(
    contract_address: &Address,
    destination_chain_selector: u64,
    receiver: &Address,
    amount: &U256,
) -> Span {
    tracing::info_span!(
        "ccip_usdc_ops.transfer_usdc",
        contract_address = %contract_address,
        destination_chain_selector = destination_chain_selector,
        receiver = %receiver,
        amount = %amount,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Record error details on the current span.
///
/// Sets the OpenTelemetry status code to ERROR alongside the structured
/// error fields.
pub fn record_error(error_type: &str, message: &str) {
    let span = Span::current();
    span.record("error.type", error_type);
    span.record("error.message", message);
    span.record("otel.status_code", "ERROR");
}
