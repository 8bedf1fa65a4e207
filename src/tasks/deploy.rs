//! Deployment tasks for the sender and receiver contracts.

use alloy_primitives::Address;

use super::{persist_record, with_progress, TaskContext};
use crate::chain::CcipChain;
use crate::records::ContractRole;
use crate::resolve::resolve_or;
use crate::{spans, Result};

/// Deploys the TransferUSDC sender contract on the target network.
///
/// Router, LINK, and USDC addresses default to the network's static config
/// when not given. The deployed address is persisted to the record store
/// best-effort and returned.
pub async fn deploy_sender(
    ctx: &TaskContext<'_>,
    router: Option<Address>,
    link: Option<Address>,
    usdc: Option<Address>,
) -> Result<Address> {
    let router = resolve_or(router, || ctx.chain.router_address())?;
    let link = resolve_or(link, || ctx.chain.link_token_address())?;
    let usdc = resolve_or(usdc, || ctx.chain.usdc_token_address())?;
    let network = ctx.network_name();

    let span = spans::deploy_contract("TransferUSDC", &ctx.chain);
    let _guard = span.enter();

    let address = with_progress(
        ctx.progress,
        format!(
            "Attempting to deploy TransferUSDC on the {network} blockchain, with the \
             Router address {router}, LINK address {link} and USDC address {usdc} \
             provided as constructor arguments"
        ),
        ctx.deployer.deploy_transfer_usdc(router, link, usdc),
    )
    .await
    .inspect_err(|e| spans::record_error("Deployment", &e.to_string()))?;

    println!("✅ TransferUSDC deployed at address {address} on {network} blockchain");

    persist_record(ctx, ContractRole::Sender, address);
    Ok(address)
}

/// Deploys the CrossChainReceiver contract on the target network.
///
/// The router address defaults to the network's static config when not
/// given. The deployed address is persisted to the record store best-effort
/// and returned.
pub async fn deploy_receiver(ctx: &TaskContext<'_>, router: Option<Address>) -> Result<Address> {
    let router = resolve_or(router, || ctx.chain.router_address())?;
    let network = ctx.network_name();

    let span = spans::deploy_contract("CrossChainReceiver", &ctx.chain);
    let _guard = span.enter();

    let address = with_progress(
        ctx.progress,
        format!(
            "Attempting to deploy CrossChainReceiver on the {network} blockchain, \
             with the Router address {router} provided as constructor argument"
        ),
        ctx.deployer.deploy_cross_chain_receiver(router),
    )
    .await
    .inspect_err(|e| spans::record_error("Deployment", &e.to_string()))?;

    println!("✅ CrossChainReceiver deployed at address {address} on {network} blockchain");

    persist_record(ctx, ContractRole::Receiver, address);
    Ok(address)
}
