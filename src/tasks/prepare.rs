//! Allowlist configuration tasks.

use alloy_chains::NamedChain;
use alloy_primitives::{Address, TxHash};

use super::{with_progress, TaskContext};
use crate::chain::CcipChain;
use crate::records::ContractRole;
use crate::resolve::resolve_or;
use crate::{spans, Result};

/// Prepares the CrossChainReceiver to accept messages.
///
/// Issues two sequential transactions: first `allowlistSourceChain` for the
/// given selector, then `allowlistSender` for the TransferUSDC contract on
/// the source network. The first transaction is confirmed before the second
/// is submitted; confirmation order matters because it gates when
/// cross-chain messages can be accepted. Returns both transaction hashes in
/// submission order.
///
/// The receiver address falls back to the network's deployment record when
/// no explicit address is given.
pub async fn prepare_receiver(
    ctx: &TaskContext<'_>,
    source_chain_selector: u64,
    sender: Address,
    receiver: Option<Address>,
) -> Result<(TxHash, TxHash)> {
    let network = ctx.network_name();
    let receiver = resolve_or(receiver, || {
        ctx.store.load(&network, ContractRole::Receiver)
    })?;

    let span = spans::configure_contract("allowlistSourceChain", &receiver);
    let guard = span.enter();
    let chain_tx = with_progress(
        ctx.progress,
        format!(
            "Attempting to call the allowlistSourceChain function on the \
             CrossChainReceiver smart contract on the {network} blockchain"
        ),
        ctx.configurator
            .allowlist_source_chain(receiver, source_chain_selector, true),
    )
    .await
    .inspect_err(|e| spans::record_error("Configuration", &e.to_string()))?;
    drop(guard);

    println!(
        "✅ now the source chain {source_chain_selector} is allowed, \
         transaction hash: {chain_tx}"
    );

    let span = spans::configure_contract("allowlistSender", &receiver);
    let guard = span.enter();
    let sender_tx = with_progress(
        ctx.progress,
        format!(
            "Attempting to call the allowlistSender function on the \
             CrossChainReceiver smart contract on the {network} blockchain"
        ),
        ctx.configurator.allowlist_sender(receiver, sender, true),
    )
    .await
    .inspect_err(|e| spans::record_error("Configuration", &e.to_string()))?;
    drop(guard);

    println!("✅ now the sender {sender} is allowed, transaction hash: {sender_tx}");

    Ok((chain_tx, sender_tx))
}

/// Prepares the TransferUSDC contract to send to a destination network.
///
/// The destination chain selector is resolved from the receiver network's
/// static config; the TransferUSDC address falls back to the active
/// network's deployment record. Both resolutions happen before any chain
/// interaction.
pub async fn prepare_sender(
    ctx: &TaskContext<'_>,
    receiver_network: NamedChain,
    transfer_usdc: Option<Address>,
) -> Result<TxHash> {
    let network = ctx.network_name();
    let sender_contract = resolve_or(transfer_usdc, || {
        ctx.store.load(&network, ContractRole::Sender)
    })?;
    let destination_chain_selector = receiver_network.chain_selector()?;

    let span = spans::configure_contract("allowlistDestinationChain", &sender_contract);
    let _guard = span.enter();
    let tx = with_progress(
        ctx.progress,
        format!(
            "Attempting to call the allowlistDestinationChain function on the \
             TransferUSDC smart contract on the {network} blockchain"
        ),
        ctx.configurator.allowlist_destination_chain(
            sender_contract,
            destination_chain_selector,
            true,
        ),
    )
    .await
    .inspect_err(|e| spans::record_error("Configuration", &e.to_string()))?;

    println!("✅ now the {receiver_network} network is allowed, transaction hash: {tx}");

    Ok(tx)
}
