//! The terminal transfer task.

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash, U256};

use super::{with_progress, TaskContext};
use crate::chain::CcipChain;
use crate::records::ContractRole;
use crate::resolve::resolve_or;
use crate::{spans, Result};

/// Sends USDC through the TransferUSDC contract to a receiver on the
/// destination network.
///
/// The TransferUSDC address falls back to the active network's deployment
/// record; the destination selector comes from the receiver network's
/// static config. Both are resolved before any chain interaction, so a
/// missing record or unknown network never submits a transaction.
pub async fn transfer(
    ctx: &TaskContext<'_>,
    receiver_network: NamedChain,
    receiver: Address,
    amount: U256,
    gas_limit: u64,
    transfer_usdc: Option<Address>,
) -> Result<TxHash> {
    let network = ctx.network_name();
    let sender_contract = resolve_or(transfer_usdc, || {
        ctx.store.load(&network, ContractRole::Sender)
    })?;
    let destination_chain_selector = receiver_network.chain_selector()?;

    let span = spans::transfer_usdc(
        &sender_contract,
        destination_chain_selector,
        &receiver,
        &amount,
    );
    let _guard = span.enter();
    let tx = with_progress(
        ctx.progress,
        format!(
            "Attempting to call the transferUsdc function on the TransferUSDC smart \
             contract on the {network} blockchain with amount {amount}. We send to \
             {destination_chain_selector} {receiver}"
        ),
        ctx.configurator.transfer_usdc(
            sender_contract,
            destination_chain_selector,
            receiver,
            amount,
            gas_limit,
        ),
    )
    .await
    .inspect_err(|e| spans::record_error("Configuration", &e.to_string()))?;

    println!("✅ success: {tx}");

    Ok(tx)
}
